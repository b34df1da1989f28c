mod common;

use common::TestEnv;

#[test]
fn generate_prints_yaml_to_stdout_by_default() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "--env", "prod", "--app", "api", "--db", "main"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("version: '3.9'\n"));
    assert!(result.stdout.contains("api_prod:"));
    assert!(result.stdout.contains("main_prod:"));
    assert!(result.stdout.contains("postgres:15.1"));
    assert!(result.stdout.contains("main_data: {}"));
}

#[test]
fn generate_without_applications_prints_skeleton() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "--env", "prod", "--db", "main:mysql"]);

    assert!(result.is_success());
    assert_eq!(result.stdout.trim_end(), "version: '3.9'");
}

#[test]
fn generate_writes_output_file() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "-a", "api:node", "-o", "docker-compose.yml"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("Wrote docker-compose.yml (1 service)"));

    let content = env.read_project_file("docker-compose.yml");
    assert!(content.contains("api-service:"));
    assert!(content.contains("image: api"));
}

#[test]
fn generate_dry_run_shows_diff_without_writing() {
    let env = TestEnv::new();
    env.write_project_file("docker-compose.yml", "version: '3.9'\n");

    let result = env.run(&["generate", "-a", "api", "-o", "docker-compose.yml", "--dry-run"]);

    assert!(result.is_success());
    assert!(result.stdout.contains("+ services:"), "stdout:\n{}", result.stdout);
    assert_eq!(env.read_project_file("docker-compose.yml"), "version: '3.9'\n");
}

#[test]
fn generate_dry_run_reports_no_changes() {
    let env = TestEnv::new();
    let first = env.run(&["generate", "-a", "api", "-o", "docker-compose.yml"]);
    assert!(first.is_success());

    let result = env.run(&["generate", "-a", "api", "-o", "docker-compose.yml", "--dry-run"]);

    assert!(result.is_success());
    assert!(result.stdout.contains("No changes to docker-compose.yml"));
}

#[test]
fn generate_json_format_is_parseable() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "-e", "dev", "-a", "web", "--format", "json"]);

    assert!(result.is_success());
    let doc: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(doc["version"], "3.9");
    assert_eq!(doc["services"]["web_dev"]["image"], "web:dev");
    assert_eq!(doc["networks"]["internal_dev"], serde_json::json!({}));
}

#[test]
fn generate_rejects_unknown_database_type() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "-a", "api", "--db", "cache:mongo"]);

    assert!(!result.is_success());
    assert_ne!(result.exit_code, 0);
    assert!(
        result.stderr.contains("unknown database type 'mongo'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stdout.is_empty());
}

#[test]
fn generate_warns_about_duplicate_names() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "-a", "api", "-a", "api"]);

    assert!(result.is_success());
    assert!(result.stderr.contains("Service 'api-service' is defined more than once"));
    assert_eq!(result.stdout.matches("api-service:").count(), 1);
}

#[test]
fn generate_json_mode_emits_events() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "generate", "-a", "api", "-o", "compose.yml"]);

    assert!(result.is_success());
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "written");
    assert_eq!(event["services"], 1);
    assert!(env.project_path("compose.yml").exists());
}

#[test]
fn generate_uses_project_config_defaults() {
    let env = TestEnv::new();
    env.write_project_file(
        "gia.toml",
        "[output]\npath = \"stack.yml\"\nformat = \"json\"\n",
    );

    let result = env.run(&["generate", "-a", "api"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let content = env.read_project_file("stack.yml");
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["services"]["api-service"]["image"], "api");
}

#[test]
fn env_var_overrides_config_format() {
    let env = TestEnv::new();
    env.write_project_file("gia.toml", "[output]\nformat = \"json\"\n");

    let result = env.run_with_env(&["generate", "-a", "api"], &[("GIA_OUTPUT_FORMAT", "yaml")]);

    assert!(result.is_success());
    assert!(result.stdout.starts_with("version: '3.9'"));
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_project_file("gia.toml", "[output]\nformatt = \"json\"\n");

    let result = env.run(&["generate", "-a", "api"]);

    assert!(result.is_success());
    assert!(result.stderr.contains("Unknown config key"), "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("Did you mean 'format'?"));
}

#[test]
fn stdout_flag_conflicts_with_output() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "-a", "api", "--stdout", "-o", "x.yml"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 2);
}

#[test]
fn broken_project_config_is_reported_and_skipped() {
    let env = TestEnv::new();
    env.write_project_file("gia.toml", "[output\nformat = \"json\"\n");

    let result = env.run(&["generate", "--app", "api"]);

    assert!(result.is_success());
    assert!(result.stdout.starts_with("version: '3.9'"));
    assert!(
        result.stderr.contains("Ignoring config") && result.stderr.contains("gia.toml"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn unknown_env_format_is_reported() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["generate", "--app", "api"], &[("GIA_OUTPUT_FORMAT", "xml")]);

    assert!(result.is_success());
    assert!(result.stdout.starts_with("version: '3.9'"));
    assert!(
        result.stderr.contains("Ignoring GIA_OUTPUT_FORMAT='xml'"),
        "stderr:\n{}",
        result.stderr
    );
}
