#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end impersonation over the static plugins.
use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::anyhow;
use security_helper::{SecurityHelper, SecurityHelperConfig};
use static_acl_voter_plugin::StaticAclVoterPluginConfig;
use static_role_lookup_plugin::StaticRoleLookupPluginConfig;
use static_role_lookup_plugin::config::{UnknownUserPolicy, UserRoles};
use surrogate_security::{GrantedAuthority, Principal, ambient};

fn directory() -> StaticRoleLookupPluginConfig {
    StaticRoleLookupPluginConfig {
        users: vec![
            UserRoles {
                name: "suzy".to_owned(),
                roles: vec!["Power User".to_owned()],
            },
            UserRoles {
                name: "tiffany".to_owned(),
                roles: vec!["Report Author".to_owned()],
            },
        ],
        unknown_user: UnknownUserPolicy::Reject,
        ..StaticRoleLookupPluginConfig::default()
    }
}

fn helper_over(roles: Arc<static_role_lookup_plugin::Service>) -> Arc<SecurityHelper> {
    let voter = static_acl_voter_plugin::Service::from_config(&StaticAclVoterPluginConfig::default());
    Arc::new(SecurityHelper::new(
        roles,
        Arc::new(voter),
        SecurityHelperConfig::default(),
    ))
}

fn helper() -> Arc<SecurityHelper> {
    helper_over(Arc::new(static_role_lookup_plugin::Service::from_config(
        &directory(),
    )))
}

fn current_name() -> Option<String> {
    ambient::current().map(|ctx| ctx.name().to_owned())
}

#[tokio::test]
async fn unknown_user_surfaces_lookup_error_in_callers_error_type() {
    let helper = helper();

    let err = helper
        .run_as_user("mallory", || async { Ok::<_, anyhow::Error>(()) })
        .await
        .unwrap_err();

    assert!(
        err.to_string().contains("mallory"),
        "unexpected error: {err}"
    );
    assert!(current_name().is_none());
}

#[tokio::test]
async fn work_error_passes_through_anyhow_unchanged() {
    let helper = helper();

    let err = helper
        .run_as_user("suzy", || async {
            Err::<(), _>(anyhow!("report rendering failed"))
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "report rendering failed");
}

#[tokio::test]
async fn role_changes_show_up_in_the_next_impersonation() {
    let roles = Arc::new(static_role_lookup_plugin::Service::from_config(&directory()));
    let helper = helper_over(roles.clone());
    let suzy = Principal::from("suzy");

    let before = helper
        .run_as_user(suzy.clone(), || async {
            Ok::<_, anyhow::Error>(ambient::current().unwrap().authorities().to_vec())
        })
        .await
        .unwrap();

    roles.grant(&suzy, GrantedAuthority::new("Report Author"));

    let after = helper
        .run_as_user(suzy.clone(), || async {
            Ok::<_, anyhow::Error>(ambient::current().unwrap().authorities().to_vec())
        })
        .await
        .unwrap();

    assert!(!before.contains(&GrantedAuthority::new("Report Author")));
    assert!(after.contains(&GrantedAuthority::new("Report Author")));
}

#[tokio::test]
async fn run_as_user_with_seeds_session_attributes() {
    let helper = helper();
    let mut params = BTreeMap::new();
    params.insert("output-type".to_owned(), serde_json::json!("pdf"));

    let output = helper
        .run_as_user_with("tiffany", &params, || async {
            let session = ambient::current().unwrap();
            Ok::<_, anyhow::Error>(session.attribute("output-type").cloned())
        })
        .await
        .unwrap();

    assert_eq!(output, Some(serde_json::json!("pdf")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_impersonations_do_not_interfere() {
    let helper = helper();

    let tasks: Vec<_> = ["suzy", "tiffany", "suzy", "tiffany"]
        .into_iter()
        .map(|name| {
            let helper = Arc::clone(&helper);
            tokio::spawn(async move {
                helper
                    .run_as_user(name, || async {
                        tokio::task::yield_now().await;
                        Ok::<_, anyhow::Error>(current_name())
                    })
                    .await
                    .map(|seen| (name, seen))
            })
        })
        .collect();

    for task in tasks {
        let (expected, seen) = task.await.unwrap().unwrap();
        assert_eq!(seen.as_deref(), Some(expected));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn system_identity_can_be_propagated_to_spawned_work() {
    let helper = helper();

    let (carried, bare) = helper
        .run_as_system(|| async {
            let carried = tokio::spawn(ambient::propagate(async { current_name() }));
            let bare = tokio::spawn(async { current_name() });
            (carried.await.unwrap(), bare.await.unwrap())
        })
        .await;

    assert_eq!(carried.as_deref(), Some("admin"));
    assert!(bare.is_none());
}
