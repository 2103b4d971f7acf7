use serde_json::json;

use crate::bundle::{
    Bundle, BundleBuilder, BundleModule, ConfigLayers, ExtensionDescriptor, ServiceDescriptor,
    ServiceEntry,
};
use crate::bundles::options;
use crate::config::Env;

/// Outgoing mail
pub struct MailBundle;

impl Bundle for MailBundle {
    fn declare(bundle: BundleBuilder) -> BundleBuilder {
        let settings = ConfigLayers::new(options(json!({
            "MAIL_SERVER": "localhost",
            "MAIL_PORT": 25,
            "MAIL_DEFAULT_SENDER": "noreply@localhost",
        })))
        .with_env(Env::Test, options(json!({ "MAIL_SUPPRESS_SEND": true })));

        bundle
            .with_override("config_module_name", "settings")
            .with_module("settings", BundleModule::config(settings))
            .with_module(
                "extensions",
                BundleModule::extensions(vec![ExtensionDescriptor::new(
                    "mail",
                    "Mail",
                    "unchained::bundles::mail::extensions",
                )]),
            )
            .with_module(
                "services",
                BundleModule::services(vec![
                    ServiceDescriptor {
                        name: "mail_service".to_string(),
                        entry: ServiceEntry::Instance {
                            class_name: "MailService".to_string(),
                            module: "unchained::bundles::mail::services".to_string(),
                        },
                    },
                    ServiceDescriptor {
                        name: "send_mail".to_string(),
                        entry: ServiceEntry::Opaque(
                            "<fn unchained::bundles::mail::send_mail>".to_string(),
                        ),
                    },
                ]),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::BundleMeta;
    use crate::hooks::ConfigureAppHook;

    #[test]
    fn test_config_read_from_settings_module() {
        let meta = BundleMeta::of::<MailBundle>();
        assert!(meta.module("config").is_none());

        let config = ConfigureAppHook.get_bundle_config(&meta, Env::Test);
        assert_eq!(config.get("MAIL_PORT"), Some(&json!(25)));
        assert_eq!(config.get("MAIL_SUPPRESS_SEND"), Some(&json!(true)));
    }
}
