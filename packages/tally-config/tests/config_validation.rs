use std::{env, fs, path::PathBuf, process};

use tally_config::{Config, Error};

fn sample_toml() -> String {
	r#"
[service]
http_bind = "127.0.0.1:8310"
log_level = "info"

[storage]
data_path = "data/sales.json"
"#
	.to_string()
}

fn write_temp(contents: &str, tag: &str) -> PathBuf {
	let path = env::temp_dir().join(format!("tally-config-{tag}-{}.toml", process::id()));

	fs::write(&path, contents).expect("Failed to write temp config.");

	path
}

#[test]
fn load_accepts_sample_config() {
	let path = write_temp(&sample_toml(), "ok");
	let cfg = tally_config::load(&path).expect("Sample config must load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8310");
	assert_eq!(cfg.storage.data_path, PathBuf::from("data/sales.json"));

	fs::remove_file(&path).expect("Failed to remove temp config.");
}

#[test]
fn load_trims_service_fields() {
	let raw = sample_toml().replace("\"127.0.0.1:8310\"", "\" 127.0.0.1:8310 \"");
	let path = write_temp(&raw, "trim");
	let cfg = tally_config::load(&path).expect("Padded config must load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8310");

	fs::remove_file(&path).expect("Failed to remove temp config.");
}

#[test]
fn load_defaults_log_level() {
	let raw = sample_toml().replace("log_level = \"info\"\n", "");
	let path = write_temp(&raw, "loglevel");
	let cfg = tally_config::load(&path).expect("Config without log_level must load.");

	assert_eq!(cfg.service.log_level, "info");

	fs::remove_file(&path).expect("Failed to remove temp config.");
}

#[test]
fn validate_rejects_empty_http_bind() {
	let raw = sample_toml().replace("\"127.0.0.1:8310\"", "\"\"");
	let path = write_temp(&raw, "bind");
	let err = tally_config::load(&path).expect_err("Empty http_bind must be rejected.");

	assert!(matches!(err, Error::Validation { .. }));
	assert!(err.to_string().contains("service.http_bind"));

	fs::remove_file(&path).expect("Failed to remove temp config.");
}

#[test]
fn validate_rejects_empty_data_path() {
	let cfg: Config = toml::from_str(
		r#"
[service]
http_bind = "127.0.0.1:8310"

[storage]
data_path = ""
"#,
	)
	.expect("Config must parse.");
	let err = tally_config::validate(&cfg).expect_err("Empty data_path must be rejected.");

	assert!(err.to_string().contains("storage.data_path"));
}

#[test]
fn load_reports_missing_file() {
	let path = env::temp_dir().join("tally-config-does-not-exist.toml");
	let err = tally_config::load(&path).expect_err("Missing config must be reported.");

	assert!(matches!(err, Error::ReadConfig { .. }));
}
