//! End-to-end behavior of the selection controllers with a custom item type.

use zselect::selection::{
    filter, transition, Effect, MultiIntent, MultiSelection, Reducer, SelectableItem,
    SingleIntent, SingleSelection,
};
use zselect::ZselectError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Reviewer {
    login: String,
    name: String,
}

impl Reviewer {
    fn new(login: &str, name: &str) -> Self {
        Self {
            login: login.to_string(),
            name: name.to_string(),
        }
    }
}

impl SelectableItem for Reviewer {
    fn id(&self) -> &str {
        &self.login
    }

    fn title(&self) -> &str {
        &self.name
    }
}

fn team() -> Vec<Reviewer> {
    vec![
        Reviewer::new("ada", "Ada Lovelace"),
        Reviewer::new("alan", "Alan Turing"),
        Reviewer::new("grace", "Grace Hopper"),
        Reviewer::new("linus", "Linus Torvalds"),
    ]
}

fn published<T: Clone>(effects: &[Effect<T>]) -> Vec<T> {
    effects.iter().filter_map(|e| e.published().cloned()).collect()
}

fn dismiss_count<T>(effects: &[Effect<T>]) -> usize {
    effects.iter().filter(|e| matches!(e, Effect::Dismiss)).count()
}

#[test]
fn filter_partitions_items_by_match() {
    let items = team();
    let query = "AL";

    let matched = filter::filter_items(&items, query);

    let ids: Vec<&str> = matched.iter().map(SelectableItem::id).collect();
    assert_eq!(ids, vec!["alan", "linus"]);
    for item in &items {
        let in_result = matched.contains(item);
        assert_eq!(in_result, filter::title_matches(item.title(), query));
    }
}

#[test]
fn multi_end_to_end_keeps_earlier_picks_across_searches() {
    let items = vec![
        Reviewer::new("1", "Apple"),
        Reviewer::new("2", "Banana"),
    ];
    let mut screen = MultiSelection::new(items.clone(), vec![]).unwrap();

    screen.reduce(MultiIntent::ToggleItem(items[0].clone())).unwrap();
    screen.reduce(MultiIntent::SetSearchText("ban".into())).unwrap();
    screen.reduce(MultiIntent::SelectAll).unwrap();
    let effects = screen.reduce(MultiIntent::Confirm).unwrap();

    assert_eq!(published(&effects), vec![items.clone()]);
    assert_eq!(dismiss_count(&effects), 1);
}

#[test]
fn multi_filtered_select_all_is_not_all_selected() {
    let mut screen = MultiSelection::new(team(), vec![]).unwrap();

    screen.reduce(MultiIntent::SetSearchText("grace".into())).unwrap();
    screen.reduce(MultiIntent::SelectAll).unwrap();

    assert_eq!(screen.selected_items(), &[Reviewer::new("grace", "Grace Hopper")]);
    assert!(!screen.is_all_selected());
}

#[test]
fn clearing_search_restores_full_list() {
    let mut screen = MultiSelection::new(team(), vec![]).unwrap();

    screen.reduce(MultiIntent::SetSearchText("hopper".into())).unwrap();
    assert_eq!(screen.visible_items().len(), 1);

    screen.reduce(MultiIntent::SetSearchText(String::new())).unwrap();
    assert_eq!(screen.visible_items(), team().as_slice());
}

#[test]
fn multi_never_holds_duplicate_ids() {
    let mut screen = MultiSelection::new(team(), vec![]).unwrap();
    let ada = Reviewer::new("ada", "Ada Lovelace");

    for intent in [
        MultiIntent::ToggleItem(ada.clone()),
        MultiIntent::SelectAll,
        MultiIntent::SetSearchText("a".into()),
        MultiIntent::SelectAll,
        MultiIntent::ToggleItem(ada),
        MultiIntent::SelectAll,
    ] {
        screen.reduce(intent).unwrap();
        let mut ids: Vec<&str> = screen.selected_items().iter().map(SelectableItem::id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}

#[test]
fn single_toggle_twice_restores_prior_selection() {
    let items = team();
    let start = SingleSelection::new(items.clone(), Some(items[2].clone())).unwrap();

    let (mid, _) = transition(&start, SingleIntent::ToggleItem(items[1].clone())).unwrap();
    assert_eq!(mid.selected_item(), Some(&items[1]));

    let (end, _) = transition(&mid, SingleIntent::ToggleItem(items[1].clone())).unwrap();
    assert_eq!(end.selected_item(), None);

    let (again, _) = transition(&start, SingleIntent::ToggleItem(items[2].clone())).unwrap();
    let (back, _) = transition(&again, SingleIntent::ToggleItem(items[2].clone())).unwrap();
    assert_eq!(back.selected_item(), start.selected_item());
}

#[test]
fn transition_leaves_input_state_untouched() {
    let start = MultiSelection::new(team(), vec![]).unwrap();

    let (next, effects) = transition(&start, MultiIntent::SelectAll).unwrap();

    assert!(effects.is_empty());
    assert!(start.selected_items().is_empty());
    assert!(next.is_all_selected());
}

#[test]
fn confirm_and_dismiss_effect_counts() {
    let items = team();
    let single = SingleSelection::new(items.clone(), Some(items[0].clone())).unwrap();
    let multi = MultiSelection::new(items.clone(), vec![items[3].clone()]).unwrap();

    let (_, confirmed) = transition(&single, SingleIntent::Confirm).unwrap();
    assert_eq!(published(&confirmed), vec![Some(items[0].clone())]);
    assert_eq!(dismiss_count(&confirmed), 1);

    let (_, dismissed) = transition(&multi, MultiIntent::DismissRequested).unwrap();
    assert!(published(&dismissed).is_empty());
    assert_eq!(dismiss_count(&dismissed), 1);
}

#[test]
fn terminated_screens_reject_further_intents() {
    let mut single = SingleSelection::new(team(), None).unwrap();
    single.reduce(SingleIntent::DismissRequested).unwrap();

    assert!(single.is_terminated());
    assert!(matches!(
        single.reduce(SingleIntent::Confirm),
        Err(ZselectError::Terminated)
    ));
}

#[test]
fn duplicate_ids_are_rejected_at_construction() {
    let mut items = team();
    items.push(Reviewer::new("ada", "Ada Again"));

    assert!(matches!(
        MultiSelection::new(items.clone(), vec![]),
        Err(ZselectError::DuplicateItemId(id)) if id == "ada"
    ));
    assert!(SingleSelection::new(items, None).is_err());
}

#[test]
fn selection_stays_within_candidate_list() {
    let items = team();
    let stranger = Reviewer::new("dennis", "Dennis Ritchie");
    let mut multi = MultiSelection::new(items.clone(), vec![]).unwrap();
    multi.reduce(MultiIntent::SelectAll).unwrap();

    assert!(matches!(
        multi.reduce(MultiIntent::ToggleItem(stranger.clone())),
        Err(ZselectError::UnknownItem(id)) if id == "dennis"
    ));
    assert_eq!(multi.selected_items(), items.as_slice());
    assert!(multi.is_all_selected());

    let effects = multi.reduce(MultiIntent::Confirm).unwrap();
    assert_eq!(published(&effects), vec![items.clone()]);

    let mut single = SingleSelection::new(items.clone(), None).unwrap();
    assert!(single.reduce(SingleIntent::ToggleItem(stranger)).is_err());
    assert_eq!(single.selected_item(), None);
}
