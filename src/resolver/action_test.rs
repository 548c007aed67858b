use super::*;

#[test]
fn test_kind_strings() {
    assert_eq!(Action::None.kind(), "none");
    assert_eq!(
        Action::Unsupported(UnsupportedReason::Enterprise).kind(),
        "unsupported"
    );
    assert_eq!(
        Action::Install {
            url: "https://example.com/p.zip".to_string()
        }
        .kind(),
        "install"
    );
    assert_eq!(
        Action::UpdateAndUninstall { update_to: None }.kind(),
        "update_and_uninstall"
    );
    assert_eq!(
        Action::ArchitectureChoice { options: vec![] }.kind(),
        "architecture_choice"
    );
}

#[test]
fn test_offers_install() {
    let action = Action::Install {
        url: "https://example.com/p.zip".to_string(),
    };
    assert!(action.offers_install());
    assert_eq!(action.install_url(), Some("https://example.com/p.zip"));

    assert!(!Action::None.offers_install());
    assert!(Action::None.install_url().is_none());
}

#[test]
fn test_offers_update_only_with_target() {
    let with_update = Action::UpdateAndUninstall {
        update_to: Some("1.2.0".to_string()),
    };
    assert!(with_update.offers_update());
    assert!(with_update.offers_uninstall());

    let without_update = Action::UpdateAndUninstall { update_to: None };
    assert!(!without_update.offers_update());
    assert!(without_update.offers_uninstall());
}

#[test]
fn test_architecture_choice_has_no_install_url() {
    let action = Action::ArchitectureChoice {
        options: vec![ArchOption {
            arch: "linux_amd64".to_string(),
            url: "https://example.com/l.zip".to_string(),
        }],
    };
    assert!(!action.offers_install());
    assert!(action.install_url().is_none());
}

#[test]
fn test_unsupported_reason_accessor() {
    let action = Action::Unsupported(UnsupportedReason::VersionMismatch);
    assert_eq!(
        action.unsupported_reason(),
        Some(UnsupportedReason::VersionMismatch)
    );
    assert!(Action::None.unsupported_reason().is_none());
}

#[test]
fn test_unsupported_messages_are_distinct() {
    let reasons = [
        UnsupportedReason::Enterprise,
        UnsupportedReason::AlreadyIncluded,
        UnsupportedReason::DevelopmentBuild,
        UnsupportedReason::VersionMismatch,
    ];

    for (i, a) in reasons.iter().enumerate() {
        for b in reasons.iter().skip(i + 1) {
            assert_ne!(a.message(), b.message());
        }
    }
}
