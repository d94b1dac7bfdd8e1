use serde_json::{json, Value};
use std::sync::Arc;

use crate::backends::memory::MemoryModel;
use crate::backends::stub::{EchoPlugin, FailingPlugin};
use crate::engine::{Arg, Runtime};
use crate::errors::{ErrorKind, ProcessError};
use crate::traits::{FsSource, Model, QueryParam};

/// End-to-end dispatch through a runtime with in-memory models and stub plugins
#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> Runtime {
        Runtime::new(Arc::new(FsSource::new(".")))
    }

    async fn seeded(runtime: &Runtime, class: &str, names: &[&str]) -> Arc<MemoryModel> {
        let model = Arc::new(MemoryModel::new(class, "id", false));
        for name in names {
            let mut row = serde_json::Map::new();
            row.insert("name".to_string(), json!(name));
            model.create(row).await.unwrap();
        }
        runtime.register_model(class, model.clone());
        model
    }

    #[tokio::test]
    async fn test_mixed_case_names_reach_lowercased_model() {
        let runtime = runtime();
        seeded(&runtime, "user", &["Ada", "Grace"]).await;

        let result = runtime
            .call("Models.USER.Find", vec![Arg::from(2), Arg::from(QueryParam::default())])
            .await
            .unwrap();
        assert_eq!(result["name"], "Grace");
    }

    #[tokio::test]
    async fn test_dispatch_errors_table_driven() {
        let runtime = runtime();
        seeded(&runtime, "user", &["Ada"]).await;

        let cases: Vec<(&str, Vec<Arg>, &str)> = vec![
            ("models.find", vec![], "malformed"),
            ("user", vec![], "malformed"),
            ("models.user.teleport", vec![], "method"),
            ("widgets.user.find", vec![], "domain"),
            ("models.user.find", vec![Arg::from(1)], "arguments"),
            ("models.ghost.find", vec![Arg::from(1)], "arguments"),
            ("models.ghost.find", vec![Arg::from(1), Arg::from(json!({}))], "model"),
            ("models.user.get", vec![Arg::from("everything")], "invalid"),
            ("models.user.paginate", vec![Arg::from(json!({})), Arg::from("one"), Arg::from(2)], "invalid"),
            ("models.user.create", vec![Arg::from(json!([1, 2]))], "invalid"),
            ("models.user.insert", vec![Arg::from(json!("name")), Arg::from(json!([]))], "invalid"),
            ("plugins.ghost.login", vec![], "plugin"),
        ];

        for (name, args, expected) in cases {
            let err = runtime.call(name, args).await.unwrap_err();
            let actual = match &err {
                ProcessError::MalformedName { .. } => "malformed",
                ProcessError::MethodNotFound { .. } => "method",
                ProcessError::UnsupportedDomain { .. } => "domain",
                ProcessError::MissingArguments { .. } => "arguments",
                ProcessError::InvalidArgument { .. } => "invalid",
                ProcessError::ModelNotFound(_) => "model",
                ProcessError::PluginNotFound(_) => "plugin",
                _ => "other",
            };
            assert_eq!(actual, expected, "{}: {}", name, err);
        }

        // Failed calls leave the registries as they were.
        assert_eq!(runtime.models().names(), vec!["user"]);
    }

    #[tokio::test]
    async fn test_paginate_three_rows_by_two() {
        let runtime = runtime();
        seeded(&runtime, "user", &["Ada", "Grace", "Linus"]).await;

        let page = runtime
            .call(
                "models.user.paginate",
                vec![Arg::from(json!({})), Arg::from(1), Arg::from(2)],
            )
            .await
            .unwrap();

        assert_eq!(page["total"], 3);
        assert_eq!(page["page"], 1);
        assert_eq!(page["pagesize"], 2);
        assert_eq!(page["pagecnt"], 2);
        assert_eq!(page["next"], 2);
        assert_eq!(page["prev"], -1);
        assert_eq!(page["data"].as_array().unwrap().len(), 2);

        let last = runtime
            .call(
                "models.user.paginate",
                vec![Arg::from(QueryParam::default()), Arg::from("2"), Arg::from("2")],
            )
            .await
            .unwrap();
        assert_eq!(last["next"], -1);
        assert_eq!(last["prev"], 1);
        assert_eq!(last["data"][0]["name"], "Linus");
    }

    #[tokio::test]
    async fn test_boundary_numbers_return_results() {
        let runtime = runtime();
        seeded(&runtime, "user", &["Ada", "Grace", "Linus"]).await;

        let page = runtime
            .call(
                "models.user.paginate",
                vec![Arg::from(json!({})), Arg::from(1), Arg::from(i64::MAX)],
            )
            .await
            .unwrap();
        assert_eq!(page["pagecnt"], 1);
        assert_eq!(page["next"], -1);
        assert_eq!(page["data"].as_array().unwrap().len(), 3);

        let key = runtime
            .call(
                "models.user.create",
                vec![Arg::from(json!({"id": i64::MAX, "name": "Max"}))],
            )
            .await
            .unwrap();
        assert_eq!(key, json!(i64::MAX));

        let err = runtime
            .call("models.user.create", vec![Arg::from(json!({"name": "Next"}))])
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::Model { .. }));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn test_typed_and_loose_insert_produce_identical_rows() {
        let runtime = runtime();
        seeded(&runtime, "typed", &[]).await;
        seeded(&runtime, "loose", &[]).await;

        runtime
            .call(
                "models.typed.insert",
                vec![
                    Arg::from(vec!["name".to_string(), "age".to_string()]),
                    Arg::from(vec![vec![json!("Ada"), json!(36)], vec![json!("Alan"), json!(41)]]),
                ],
            )
            .await
            .unwrap();
        runtime
            .call(
                "models.loose.insert",
                vec![
                    Arg::from(json!(["name", "age"])),
                    Arg::from(json!([["Ada", 36], ["Alan", 41]])),
                ],
            )
            .await
            .unwrap();

        let typed = runtime.call("models.typed.get", vec![Arg::from(json!({}))]).await.unwrap();
        let loose = runtime.call("models.loose.get", vec![Arg::from(json!({}))]).await.unwrap();
        assert_eq!(typed, loose);
        assert_eq!(typed.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_model_lifecycle_through_processes() {
        let runtime = runtime();
        runtime.register_model("pet", Arc::new(MemoryModel::new("pet", "id", true)));

        let id = runtime
            .call("models.pet.create", vec![Arg::from(json!({"name": "Rex"}))])
            .await
            .unwrap();
        assert_eq!(id, json!(1));

        runtime
            .call("models.pet.update", vec![Arg::from(1), Arg::from(json!({"age": 3}))])
            .await
            .unwrap();
        let saved = runtime
            .call("models.pet.save", vec![Arg::from(json!({"id": 1, "name": "Rex II"}))])
            .await
            .unwrap();
        assert_eq!(saved, json!(1));

        // A non-query second argument to find falls back to empty options.
        let rex = runtime
            .call("models.pet.find", vec![Arg::from("1"), Arg::from("ignored")])
            .await
            .unwrap();
        assert_eq!(rex, json!({"id": 1, "name": "Rex II", "age": 3}));

        runtime.call("models.pet.delete", vec![Arg::from(1)]).await.unwrap();
        let err = runtime
            .call("models.pet.find", vec![Arg::from(1), Arg::from(json!({}))])
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::Model { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let trashed = runtime
            .call("models.pet.get", vec![Arg::from(json!({"with_trashed": true}))])
            .await
            .unwrap();
        assert_eq!(trashed.as_array().unwrap().len(), 1);

        runtime.call("models.pet.destroy", vec![Arg::from(1)]).await.unwrap();
        let empty = runtime
            .call("models.pet.get", vec![Arg::from(json!({"with_trashed": true}))])
            .await
            .unwrap();
        assert_eq!(empty, json!([]));
    }

    #[tokio::test]
    async fn test_plugin_forwards_arguments_in_order() {
        let runtime = runtime();
        let plugin = Arc::new(EchoPlugin::new("auth"));
        runtime.register_plugin("Auth", plugin.clone());

        let result = runtime
            .call(
                "plugins.auth.Login",
                vec![Arg::from("ada"), Arg::from(json!({"remember": true})), Arg::from(3)],
            )
            .await
            .unwrap();

        assert_eq!(
            result,
            json!({"method": "login", "args": ["ada", {"remember": true}, 3]})
        );
        assert_eq!(plugin.calls(), 1);
    }

    #[tokio::test]
    async fn test_plugin_failures_keep_their_class() {
        let runtime = runtime();
        runtime.register_plugin("flaky", Arc::new(FailingPlugin::transport("flaky")));
        runtime.register_plugin("strict", Arc::new(FailingPlugin::application("strict", 404)));
        runtime.register_plugin("picky", Arc::new(FailingPlugin::application("picky", 422)));

        let cases = vec![
            ("plugins.flaky.run", ErrorKind::Internal),
            ("plugins.strict.run", ErrorKind::NotFound),
            ("plugins.picky.run", ErrorKind::BadRequest),
        ];

        for (name, kind) in cases {
            let err = runtime.call(name, vec![]).await.unwrap_err();
            assert!(matches!(err, ProcessError::Plugin { .. }), "{}: {}", name, err);
            assert_eq!(err.kind(), kind, "{}", name);
        }
    }

    #[tokio::test]
    async fn test_registered_process_outside_builtin_domains() {
        let runtime = runtime();
        runtime.processes().register_fn("utils.math.sum", |caller| {
            let total: i64 = caller
                .values()
                .iter()
                .filter_map(Value::as_i64)
                .sum();
            Ok(json!(total))
        });

        let sum = runtime
            .call("Utils.Math.Sum", vec![Arg::from(1), Arg::from(2), Arg::from(3)])
            .await
            .unwrap();
        assert_eq!(sum, json!(6));

        let err = runtime.call("utils.math.product", vec![]).await.unwrap_err();
        assert!(matches!(err, ProcessError::UnsupportedDomain { .. }));
    }
}
