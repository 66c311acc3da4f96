use domains::{DomainError, DraftField, IdStrategy, PostStatus, Section};
use integration_tests::{admin_page, draft, ids, post, seeded_page};
use notify_adapters::ToastLog;
use services::{AdminRequest, EventOutcome, ForumPage, PageEvent, PageOptions};

#[test]
fn filter_by_section_matches_exactly_in_order() {
    let seeded = vec![
        post(1, Section::News),
        post(2, Section::Rules),
        post(3, Section::News),
        post(4, Section::Support),
        post(5, Section::News),
    ];
    let (page, _) = ForumPage::start(
        seeded.clone(),
        Vec::new(),
        ToastLog::new(),
        PageOptions::default(),
    );

    for section in Section::ALL {
        let expected: Vec<u64> = seeded
            .iter()
            .filter(|p| p.section == section)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids(page.posts().filter_by_section(section)), expected);
    }
}

#[test]
fn created_post_lands_first_with_defaults() {
    let (mut page, admin) = admin_page();
    let before = page.posts().len();

    let id = page.create_post(&admin, draft("T", "C", Section::News));

    let first = page.posts().iter().next().unwrap();
    assert_eq!(first.id, id);
    assert_eq!(id, before as u64 + 1);
    assert_eq!(first.title, "T");
    assert_eq!(first.content, "C");
    assert_eq!(first.section, Section::News);
    assert_eq!((first.likes, first.comments), (0, 0));
    assert_eq!(first.status, PostStatus::Active);
    assert!(!first.is_pinned);
}

#[test]
fn blank_drafts_never_reach_the_store() {
    let (mut page, admin) = admin_page();
    page.open_create_dialog();

    for (title, content) in [("", "C"), ("T", ""), ("  ", "C"), ("T", "\t\n")] {
        page.update_draft(DraftField::Title(title.into()));
        page.update_draft(DraftField::Content(content.into()));
        assert!(!page.view().draft().is_submittable());
        assert!(matches!(page.submit_draft(&admin), Err(DomainError::Validation(_))));
    }
    assert_eq!(page.posts().len(), 3);
    assert!(page.sink().is_empty());
}

#[test]
fn delete_existing_removes_exactly_one() {
    let (mut page, admin) = admin_page();
    let removed = page.delete_post(&admin, 2);
    assert_eq!(ids(removed.iter()), vec![2]);
    assert_eq!(page.posts().len(), 2);
    assert!(page.posts().get(2).is_none());
}

#[test]
fn delete_missing_leaves_store_unchanged() {
    let (mut page, admin) = admin_page();
    let before: Vec<_> = page.posts().iter().cloned().collect();
    assert!(page.delete_post(&admin, 404).is_empty());
    let after: Vec<_> = page.posts().iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn cancel_delete_restores_none_without_touching_posts() {
    let (mut page, admin) = admin_page();
    page.request_admin_action(&admin, AdminRequest::Delete(1)).unwrap();
    assert_eq!(page.view().admin_action().selected_post().map(|p| p.id), Some(1));

    page.cancel_admin_action();
    assert!(page.view().admin_action().is_none());
    assert!(page.view().admin_action().selected_post().is_none());
    assert_eq!(page.posts().len(), 3);
}

#[test]
fn patch_notes_create_then_delete_restores_seed() {
    let (mut page, admin) = admin_page();
    let seed: Vec<_> = page.posts().iter().cloned().collect();
    assert_eq!(ids(seed.iter()), vec![1, 2, 3]);

    page.open_create_dialog();
    page.update_draft(DraftField::Title("Patch notes".into()));
    page.update_draft(DraftField::Content("Fixed bugs".into()));
    page.update_draft(DraftField::Section(Section::News));
    let id = page.submit_draft(&admin).unwrap();

    assert_eq!(id, 4);
    assert_eq!(page.posts().len(), 4);
    assert_eq!(page.posts().iter().next().map(|p| p.id), Some(4));

    page.request_admin_action(&admin, AdminRequest::Delete(4)).unwrap();
    assert_eq!(ids(page.confirm_delete(&admin).iter()), vec![4]);

    let after: Vec<_> = page.posts().iter().cloned().collect();
    assert_eq!(after, seed);
    assert!(page.view().admin_action().is_none());
}

#[test]
fn visible_posts_follow_selected_section() {
    let (mut page, admin) = admin_page();
    assert_eq!(ids(page.visible_posts()), vec![2]);

    page.select_section(Section::Rules);
    assert_eq!(ids(page.visible_posts()), vec![1]);

    page.create_post(&admin, draft("Rule 2", "Be kind", Section::Rules));
    assert_eq!(ids(page.visible_posts()), vec![4, 1]);
}

#[test]
fn length_strategy_reissues_ids_after_deletes() {
    let (mut page, admin) = admin_page();
    page.delete_post(&admin, 1);
    let id = page.create_post(&admin, draft("dup", "dup", Section::Support));
    assert_eq!(id, 3);
    assert_eq!(page.posts().iter().filter(|p| p.id == 3).count(), 2);
}

#[test]
fn delete_removes_every_post_sharing_a_reissued_id() {
    let (mut page, admin) = admin_page();
    page.delete_post(&admin, 1);
    let id = page.create_post(&admin, draft("dup", "dup", Section::Support));
    assert_eq!(id, 3);
    page.sink().drain();

    let removed = page.delete_post(&admin, 3);
    assert_eq!(removed.len(), 2);
    assert!(page.posts().iter().all(|p| p.id != 3));
    assert_eq!(ids(page.posts().iter()), vec![2]);
    assert_eq!(page.sink().len(), 1);
}

#[test]
fn confirmed_delete_of_a_duplicated_id_clears_both() {
    let (mut page, admin) = admin_page();
    page.delete_post(&admin, 1);
    page.create_post(&admin, draft("dup", "dup", Section::News));

    page.request_admin_action(&admin, AdminRequest::Delete(3)).unwrap();
    let outcome = page.update(Some(&admin), PageEvent::ConfirmDelete).unwrap();
    assert_eq!(outcome, EventOutcome::Deleted(Some(3)));
    assert!(page.posts().get(3).is_none());
    assert_eq!(page.posts().len(), 1);
}

#[test]
fn monotonic_strategy_keeps_ids_unique() {
    let (mut page, admin) = seeded_page(PageOptions {
        id_strategy: IdStrategy::Monotonic,
        ..PageOptions::default()
    });
    let admin = admin.unwrap();
    page.delete_post(&admin, 1);
    let id = page.create_post(&admin, draft("fresh", "fresh", Section::Support));
    assert_eq!(id, 4);

    let mut all = ids(page.posts().iter());
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), page.posts().len());
}
