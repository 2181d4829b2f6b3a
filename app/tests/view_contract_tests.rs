use std::sync::Arc;

use app::{
    components::{call_to_action, error_message, loader},
    navigation::{NavigationError, Navigator, SharedNavigator},
    view_state::{self, ViewState},
};
use leptos::prelude::*;
use mockall::mock;

mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn navigate(&self, path: &str) -> Result<(), NavigationError>;
        fn back(&self) -> Result<(), NavigationError>;
    }
}

fn idle_navigator() -> SharedNavigator {
    Arc::new(MockNav::new())
}

#[cfg(test)]
mod view_contract_tests {

    use super::*;

    // === ErrorMessage ===

    #[test]
    fn test_error_message_displays_text_verbatim() {
        let messages = [
            "Network unavailable",
            "",
            "   leading and trailing   ",
            "Ünïcødé 💍 message",
            "<b>bold</b> & <i>italic</i>",
        ];

        for message in messages {
            let html =
                Owner::new().with(|| error_message::component(message, idle_navigator()).to_html());
            assert!(html.contains(error_message::HEADING), "heading missing for {message:?}");
            assert!(!html.contains("<b>"), "markup interpreted for {message:?}");
            if !message.contains(['<', '&']) {
                assert!(html.contains(message), "message missing for {message:?}");
            }
        }
    }

    #[test]
    fn test_error_message_escapes_ampersand() {
        let html = Owner::new()
            .with(|| error_message::component("salt & pepper", idle_navigator()).to_html());
        assert!(html.contains("salt &amp; pepper"));
    }

    #[test]
    fn test_go_back_has_no_other_side_effect() {
        let mut navigator = MockNav::new();
        navigator.expect_back().times(1).returning(|| Ok(()));
        navigator.expect_navigate().never();

        error_message::go_back(&navigator);
    }

    #[test]
    fn test_go_back_with_empty_history_does_not_panic() {
        let mut navigator = MockNav::new();
        navigator
            .expect_back()
            .times(1)
            .returning(|| Err(NavigationError::History("no previous entry".into())));

        error_message::go_back(&navigator);
    }

    // === CallToAction ===

    #[test]
    fn test_call_to_action_targets_templates() {
        let html = Owner::new().with(|| call_to_action::component(idle_navigator()).to_html());
        assert_eq!(html.matches("href=").count(), 1);
        assert!(html.contains(r#"href="/templates""#));
    }

    #[test]
    fn test_call_to_action_activation() {
        let mut navigator = MockNav::new();
        navigator
            .expect_navigate()
            .withf(|path| path == "/templates")
            .times(1)
            .returning(|_| Ok(()));
        navigator.expect_back().never();

        call_to_action::activate(&navigator);
    }

    // === LoadingScreen ===

    #[test]
    fn test_loading_screen_twice_is_identical() {
        let first = Owner::new().with(|| loader::component().to_html());
        let second = Owner::new().with(|| loader::component().to_html());
        assert_eq!(first, second);
        assert_eq!(first.matches("Loading your invitation...").count(), 1);
    }

    // === Resource neutrality ===

    #[test]
    fn test_mount_unmount_cycles_release_navigator() {
        let navigator = idle_navigator();

        for _ in 0..1000 {
            let owner = Owner::new();
            owner.with(|| {
                drop(loader::component().to_html());
                drop(call_to_action::component(Arc::clone(&navigator)).to_html());
                drop(error_message::component("cycle", Arc::clone(&navigator)).to_html());
            });
            drop(owner);
        }

        assert_eq!(Arc::strong_count(&navigator), 1);
    }

    #[test]
    fn test_dropped_views_release_navigator() {
        let navigator = idle_navigator();
        Owner::new().with(|| {
            let view = view_state::component(
                ViewState::error("unmounted"),
                Arc::clone(&navigator),
                || (),
            );
            drop(view);
        });
        assert_eq!(Arc::strong_count(&navigator), 1);
    }
}
