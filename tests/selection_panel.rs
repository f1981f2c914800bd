// Selection panel scenarios: page toggles, "All pages", summary and height

mod test_helpers;

use page_selector::{Error, Notification, PageCount, Severity, Summary, Target};
use proptest::prelude::*;
use std::time::Instant;
use test_helpers::*;

#[test]
fn initializes_unchecked_pages_for_any_count() {
    for n in 1..=12 {
        let panel = create_panel(n);
        let labels: Vec<String> = panel.page_rows().into_iter().map(|r| r.label).collect();
        let expected: Vec<String> = (1..=n).map(|i| format!("Page {i}")).collect();
        assert_eq!(labels, expected);
        assert!(panel.page_rows().iter().all(|r| !r.checked));
        assert!(!panel.state().all_checked());
    }
}

#[test]
fn rejects_non_positive_page_counts() {
    assert!(matches!(PageCount::new(0), Err(Error::InvalidPageCount(_))));
    assert!(matches!(PageCount::new(-1), Err(Error::InvalidPageCount(_))));
    assert!(matches!("1.5".parse::<PageCount>(), Err(Error::InvalidPageCount(_))));
}

#[test]
fn set_all_forces_every_page() {
    let mut panel = create_panel(5);
    panel.set_all(true);
    assert!(panel.state().all_checked());
    assert!(panel.state().selections().iter().all(|p| p.checked));
    panel.set_all(false);
    assert!(!panel.state().all_checked());
    assert!(panel.state().selections().iter().all(|p| !p.checked));
}

#[test]
fn unchecking_one_page_clears_all_pages() {
    let mut panel = create_panel(4);
    let now = Instant::now();
    click_and_leave(&mut panel, Target::AllPages, now);
    assert!(panel.all_pages_row().checked);
    click_and_leave(&mut panel, Target::Page(1), now);
    assert!(!panel.all_pages_row().checked);
    assert_eq!(checked_labels(&panel), ["Page 1", "Page 3", "Page 4"]);
}

#[test]
fn set_page_twice_equals_once() {
    let mut once = create_panel(4);
    once.set_page("Page 2", true).unwrap();
    let mut twice = create_panel(4);
    twice.set_page("Page 2", true).unwrap();
    twice.set_page("Page 2", true).unwrap();
    assert_eq!(once.state(), twice.state());
}

#[test]
fn summary_lists_pages_in_page_order() {
    let mut panel = create_panel(4);
    let now = Instant::now();
    click_and_leave(&mut panel, Target::Page(3), now);
    click_and_leave(&mut panel, Target::Page(1), now);
    assert_eq!(
        panel.summarize(),
        Summary::Partial(vec!["Page 2".to_string(), "Page 4".to_string()])
    );
}

#[test]
fn done_emits_the_three_message_shapes() {
    let mut panel = create_panel(4);
    panel.done();
    panel.set_page("Page 3", true).unwrap();
    panel.done();
    panel.set_all(true);
    panel.done();

    let expected = vec![
        Notification { severity: Severity::Info, text: "No pages are selected".into() },
        Notification { severity: Severity::Success, text: "Selected pages: Page 3".into() },
        Notification { severity: Severity::Success, text: "All pages are selected".into() },
    ];
    assert_eq!(panel.notifier(), &expected);
}

#[test]
fn summarize_does_not_notify() {
    let mut panel = create_panel(2);
    panel.set_page("Page 1", true).unwrap();
    let before = panel.state().clone();
    panel.summarize();
    assert!(panel.notifier().is_empty());
    assert_eq!(panel.state(), &before);
}

#[test]
fn reinitialize_resets_selection() {
    let mut panel = create_panel(4);
    panel.set_all(true);
    panel.initialize(PageCount::new(6).unwrap());
    assert_eq!(panel.page_rows().len(), 6);
    assert!(!panel.state().all_checked());
    assert_eq!(panel.summarize(), Summary::Empty);
}

#[test]
fn panel_height_grows_past_four_pages() {
    assert_eq!(create_panel(4).height(), 326);
    assert_eq!(create_panel(6).height(), 430);
    assert_eq!(create_panel(1).height(), 326);
}

proptest! {
    #[test]
    fn all_checked_iff_every_page_checked(mask in prop::collection::vec(any::<bool>(), 1..10)) {
        let mut panel = create_panel(mask.len() as i64);
        for (i, checked) in mask.iter().enumerate() {
            if *checked {
                panel.set_page(&format!("Page {}", i + 1), true).unwrap();
            }
        }
        prop_assert_eq!(panel.state().all_checked(), mask.iter().all(|c| *c));
    }

    #[test]
    fn partial_summary_is_sorted(
        order in Just((0..6usize).collect::<Vec<_>>()).prop_shuffle(),
        take in 1..6usize,
    ) {
        let mut panel = create_panel(6);
        let mut picked: Vec<usize> = order.into_iter().take(take).collect();
        for &i in &picked {
            panel.set_page(&format!("Page {}", i + 1), true).unwrap();
        }
        picked.sort_unstable();
        let labels: Vec<String> = picked.iter().map(|i| format!("Page {}", i + 1)).collect();
        prop_assert_eq!(panel.summarize(), Summary::Partial(labels));
    }
}
