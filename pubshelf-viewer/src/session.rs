use anyhow::Result;
use dialoguer::{Select, console::Term};
use pubshelf_core::ViewState;
use pubshelf_model::SortCriteria;

use crate::render;

/// Page sizes offered by the controls. A rendering concern: the core accepts
/// any positive size.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    Sort(SortCriteria),
    PageSize(usize),
    Quit,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Action::FirstPage => "First page".to_owned(),
            Action::PrevPage => "Previous page".to_owned(),
            Action::NextPage => "Next page".to_owned(),
            Action::LastPage => "Last page".to_owned(),
            Action::Sort(criteria) => format!("Sort: {}", criteria.label()),
            Action::PageSize(size) => format!("Show {size} per page"),
            Action::Quit => "Quit".to_owned(),
        }
    }
}

/// Actions offered for the current state.
///
/// Navigation entries the controls mark disabled are not offered at all, so
/// every selectable action maps onto a valid transition.
fn available_actions(state: &ViewState) -> Vec<Action> {
    let controls = state.controls();
    let mut actions = Vec::new();

    if controls.next {
        actions.push(Action::NextPage);
    }
    if controls.prev {
        actions.push(Action::PrevPage);
    }
    if controls.first {
        actions.push(Action::FirstPage);
    }
    if controls.last {
        actions.push(Action::LastPage);
    }
    for criteria in SortCriteria::all() {
        if *criteria != state.criteria() {
            actions.push(Action::Sort(*criteria));
        }
    }
    for &size in PAGE_SIZE_OPTIONS {
        if size != state.page_size() {
            actions.push(Action::PageSize(size));
        }
    }
    actions.push(Action::Quit);
    actions
}

fn apply(state: &mut ViewState, action: Action) {
    match action {
        Action::FirstPage => state.go_to_page(1),
        Action::LastPage => {
            let last = state.total_pages();
            state.go_to_page(last);
        }
        Action::PrevPage => state.shift_page(-1),
        Action::NextPage => state.shift_page(1),
        Action::Sort(criteria) => state.set_sort_criteria(criteria),
        Action::PageSize(size) => state.set_page_size(size),
        Action::Quit => {}
    }
}

/// Interactive session loop: render the page, offer the valid actions,
/// apply the chosen transition, repeat until Quit.
pub fn run(state: &mut ViewState) -> Result<()> {
    let term = Term::stderr();
    loop {
        print!("{}", render::render_page(state));

        let actions = available_actions(state);
        let labels: Vec<String> = actions.iter().map(Action::label).collect();
        let choice = Select::new()
            .with_prompt("Navigate (arrows/enter)")
            .items(&labels)
            .default(0)
            .interact_on(&term)?;

        match actions[choice] {
            Action::Quit => break,
            action => apply(state, action),
        }
    }
    Ok(())
}
