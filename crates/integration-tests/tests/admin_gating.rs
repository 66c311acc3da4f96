use domains::{AdminAction, AdminActionKind, DomainError, Tab};
use integration_tests::{admin_page, seeded_page};
use services::{AdminRequest, EventOutcome, PageEvent, PageOptions};

fn guest_options() -> PageOptions {
    PageOptions {
        is_admin: false,
        ..PageOptions::default()
    }
}

#[test]
fn guest_session_has_no_capability_and_no_admin_view() {
    let (mut page, admin) = seeded_page(guest_options());
    assert!(admin.is_none());

    let outcome = page.update(admin.as_ref(), PageEvent::SelectTab(Tab::Admin)).unwrap();
    assert_eq!(outcome, EventOutcome::Unavailable);
    assert_ne!(page.view().active_tab(), Tab::Admin);
}

#[test]
fn guest_admin_events_change_nothing() {
    let (mut page, admin) = seeded_page(guest_options());
    let events = [
        PageEvent::OpenCreateDialog,
        PageEvent::SubmitDraft,
        PageEvent::RequestAdminAction(AdminRequest::Delete(1)),
        PageEvent::RequestAdminAction(AdminRequest::Ban),
        PageEvent::RequestAdminAction(AdminRequest::Filter),
        PageEvent::ConfirmDelete,
        PageEvent::ConfirmBan,
        PageEvent::SaveFilterSettings,
    ];
    for event in events {
        assert_eq!(page.update(admin.as_ref(), event).unwrap(), EventOutcome::Unavailable);
    }
    assert_eq!(page.posts().len(), 3);
    assert!(page.view().admin_action().is_none());
    assert!(page.sink().is_empty());
}

#[test]
fn admin_reaches_admin_tab() {
    let (mut page, admin) = admin_page();
    page.update(Some(&admin), PageEvent::SelectTab(Tab::Admin)).unwrap();
    assert_eq!(page.view().active_tab(), Tab::Admin);
    assert_eq!(page.visible_posts().count(), 0);
}

#[test]
fn active_actions_pass_through_none() {
    let (mut page, admin) = admin_page();
    let requests = [
        AdminRequest::Delete(2),
        AdminRequest::Ban,
        AdminRequest::Filter,
    ];

    for first in requests {
        page.request_admin_action(&admin, first).unwrap();
        let pending = page.view().admin_action().kind();
        for second in requests {
            let err = page.request_admin_action(&admin, second).unwrap_err();
            assert!(matches!(
                err,
                DomainError::AdminActionPending { pending: p, .. } if p == pending
            ));
            assert_eq!(page.view().admin_action().kind(), pending);
        }
        page.cancel_admin_action();
        assert_eq!(page.view().admin_action(), &AdminAction::None);
    }
}

#[test]
fn confirmations_return_to_none() {
    let (mut page, admin) = admin_page();

    page.request_admin_action(&admin, AdminRequest::Ban).unwrap();
    assert!(page.confirm_ban(&admin));
    assert_eq!(page.view().admin_action().kind(), AdminActionKind::None);

    page.request_admin_action(&admin, AdminRequest::Filter).unwrap();
    assert!(page.save_filter_settings(&admin));
    assert_eq!(page.view().admin_action().kind(), AdminActionKind::None);

    page.request_admin_action(&admin, AdminRequest::Delete(3)).unwrap();
    assert_eq!(page.confirm_delete(&admin).len(), 1);
    assert_eq!(page.view().admin_action().kind(), AdminActionKind::None);
}

#[test]
fn confirm_delete_without_pending_delete_is_noop() {
    let (mut page, admin) = admin_page();
    assert!(page.confirm_delete(&admin).is_empty());
    assert_eq!(page.posts().len(), 3);
    assert!(page.sink().is_empty());
}

#[test]
fn only_the_matching_confirm_acts_on_a_pending_dialog() {
    let (mut page, admin) = admin_page();

    page.update(Some(&admin), PageEvent::RequestAdminAction(AdminRequest::Filter)).unwrap();
    for event in [PageEvent::ConfirmBan, PageEvent::ConfirmDelete] {
        let outcome = page.update(Some(&admin), event).unwrap();
        assert_ne!(outcome, EventOutcome::Applied);
        assert_eq!(page.view().admin_action(), &AdminAction::Filter);
    }
    assert!(page.sink().is_empty());

    page.cancel_admin_action();
    page.update(Some(&admin), PageEvent::RequestAdminAction(AdminRequest::Ban)).unwrap();
    let outcome = page.update(Some(&admin), PageEvent::SaveFilterSettings).unwrap();
    assert_eq!(outcome, EventOutcome::Unavailable);
    assert_eq!(page.view().admin_action(), &AdminAction::Ban);
    assert!(page.sink().is_empty());

    let outcome = page.update(Some(&admin), PageEvent::ConfirmBan).unwrap();
    assert_eq!(outcome, EventOutcome::Applied);
    assert_eq!(page.sink().len(), 1);
    assert!(page.view().admin_action().is_none());
}

#[test]
fn confirms_without_a_pending_dialog_do_nothing() {
    let (mut page, admin) = admin_page();
    for event in [PageEvent::ConfirmBan, PageEvent::SaveFilterSettings] {
        assert_eq!(page.update(Some(&admin), event).unwrap(), EventOutcome::Unavailable);
    }
    assert!(!page.confirm_ban(&admin));
    assert!(!page.save_filter_settings(&admin));
    assert!(page.view().admin_action().is_none());
    assert!(page.sink().is_empty());
}
