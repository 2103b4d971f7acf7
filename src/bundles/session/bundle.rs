use serde_json::json;

use crate::bundle::{
    Bundle, BundleBuilder, BundleModule, ConfigLayers, ExtensionDescriptor, ServiceDescriptor,
    ServiceEntry,
};
use crate::bundles::options;
use crate::config::Env;

/// Server-side sessions
pub struct SessionBundle;

impl Bundle for SessionBundle {
    fn declare(bundle: BundleBuilder) -> BundleBuilder {
        let config = ConfigLayers::new(options(json!({
            "SESSION_TYPE": "null",
            "SESSION_PERMANENT": true,
            "SESSION_COOKIE_NAME": "session",
        })))
        .with_env(
            Env::Production,
            options(json!({ "SESSION_COOKIE_SECURE": true })),
        );

        bundle
            .with_module("config", BundleModule::config(config))
            .with_module(
                "extensions",
                BundleModule::extensions(vec![ExtensionDescriptor::new(
                    "session",
                    "Session",
                    "unchained::bundles::session::extensions",
                )]),
            )
            .with_module(
                "services",
                BundleModule::services(vec![ServiceDescriptor {
                    name: "session_interface".to_string(),
                    entry: ServiceEntry::Class {
                        type_name: "SessionInterface".to_string(),
                        module: "unchained::bundles::session::services".to_string(),
                    },
                }]),
            )
    }
}
