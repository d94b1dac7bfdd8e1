#[cfg(test)]
mod integration_tests {
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    use crate::config::{load_and_validate_config, RuntimeBuilder};
    use crate::engine::Arg;
    use crate::errors::{ConfigError, ErrorKind};

    fn write(dir: &Path, file: &str, content: &str) {
        let path = dir.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// A config file with a sqlite connector and two models builds a runtime
    /// that answers model processes.
    #[tokio::test]
    async fn test_config_file_to_running_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("app.db");

        write(
            dir.path(),
            "app.yaml",
            "root: dsl\nlog_level: debug\nconnectors:\n  - id: main\n    file: connectors/main.conn.yaml\nmodels:\n  - file: models/user.mod.yaml\n  - id: pet\n    file: models/animal.mod.json\n",
        );
        write(
            dir.path(),
            "dsl/connectors/main.conn.yaml",
            &format!("type: sqlite\nname: Main\noptions:\n  db: {}\n", db.display()),
        );
        write(
            dir.path(),
            "dsl/models/user.mod.yaml",
            "name: User\nvalues:\n  - name: Ada\n  - name: Grace\n",
        );
        write(
            dir.path(),
            "dsl/models/animal.mod.json",
            r#"{"name": "Animal", "option": {"soft_deletes": true}, "values": [{"name": "Rex"}]}"#,
        );

        let cfg = load_and_validate_config(dir.path().join("app.yaml")).unwrap();
        let runtime = RuntimeBuilder::from_config(&cfg).await.unwrap();

        assert_eq!(runtime.connectors().table().ids(), vec!["main"]);
        assert_eq!(runtime.models().names(), vec!["pet", "user"]);

        let grace = runtime
            .call("models.user.find", vec![Arg::from(2), Arg::from(json!({}))])
            .await
            .unwrap();
        assert_eq!(grace["name"], "Grace");

        let pets = runtime
            .call("models.pet.get", vec![Arg::from(json!({}))])
            .await
            .unwrap();
        assert_eq!(pets, json!([{"id": 1, "name": "Rex"}]));

        runtime.shutdown().await;
        assert!(runtime.connectors().table().is_empty());
    }

    /// Loading stops at the first broken entry and reports which layer failed.
    #[tokio::test]
    async fn test_build_failures_table_driven() {
        let cases = vec![
            (
                "document store without hosts",
                "connectors:\n  - id: docs\n    file: docs.conn.yaml\n",
                "docs.conn.yaml",
                "type: document-store\noptions:\n  db: app\n",
                "connector",
            ),
            (
                "unsupported connector type",
                "connectors:\n  - id: q\n    file: q.conn.yaml\n",
                "q.conn.yaml",
                "type: queue\n",
                "connector",
            ),
            (
                "model with a blank primary",
                "models:\n  - file: user.mod.yaml\n",
                "user.mod.yaml",
                "name: User\nprimary: \"\"\n",
                "model",
            ),
            (
                "missing model file",
                "models:\n  - file: ghost.mod.yaml\n",
                "other.mod.yaml",
                "name: Other\n",
                "model",
            ),
        ];

        for (label, config, file, content, expected) in cases {
            let dir = tempfile::tempdir().unwrap();
            write(dir.path(), "app.yaml", config);
            write(dir.path(), file, content);

            let cfg = load_and_validate_config(dir.path().join("app.yaml")).unwrap();
            let err = match RuntimeBuilder::from_config(&cfg).await {
                Ok(_) => panic!("{}: expected a failure", label),
                Err(e) => e,
            };
            let actual = match &err {
                ConfigError::Connector(_) => "connector",
                ConfigError::Model(_) => "model",
                _ => "other",
            };
            assert_eq!(actual, expected, "{}: {}", label, err);
        }
    }

    #[tokio::test]
    async fn test_missing_model_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "app.yaml", "models:\n  - file: ghost.mod.yaml\n");

        let cfg = load_and_validate_config(dir.path().join("app.yaml")).unwrap();
        let err = match RuntimeBuilder::from_config(&cfg).await {
            Ok(_) => panic!("expected a failure"),
            Err(e) => e,
        };
        match err {
            ConfigError::Model(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("unexpected error: {}", other),
        }
    }
}
