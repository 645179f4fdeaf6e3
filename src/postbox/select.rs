//! Resolution of "the post the user means".
//!
//! View, edit and delete all funnel through [`resolve`]; what happens
//! depends on how many posts the store holds.

use std::time::Duration;

use uuid::Uuid;

use crate::actions;
use crate::error::Result;
use crate::model::Post;
use crate::prompt::{Message, Prompt};
use crate::store::{DocumentBackend, PostStore};

/// Delay before a lone post is picked automatically.
const AUTO_SELECT_PAUSE: Duration = Duration::from_millis(750);

const PREVIEW_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A concrete post was picked (or just created).
    Chosen(Uuid),
    /// The user asked for the menu instead.
    ToMenu,
    /// The list was dismissed without a choice.
    NotFound,
    /// The user asked to leave the program.
    Terminate,
}

pub fn resolve<B: DocumentBackend>(
    store: &mut PostStore<B>,
    ui: &impl Prompt,
) -> Result<Selection> {
    match store.len() {
        0 => resolve_empty(store, ui),
        1 => {
            let post = &store.posts()[0];
            ui.report(&Message::info(format!(
                "Only one post here, picking \"{}\".",
                post.title
            )));
            ui.pause(AUTO_SELECT_PAUSE);
            Ok(Selection::Chosen(post.id))
        }
        _ => resolve_many(store, ui),
    }
}

fn resolve_empty<B: DocumentBackend>(
    store: &mut PostStore<B>,
    ui: &impl Prompt,
) -> Result<Selection> {
    let choice = ui.select(
        "There are no posts yet. What now?",
        &["Create one now", "Back to the menu", "Exit"],
    )?;
    match choice {
        0 => {
            let id = actions::create::run(store, ui)?;
            Ok(Selection::Chosen(id))
        }
        1 => Ok(Selection::ToMenu),
        _ => Ok(Selection::Terminate),
    }
}

fn resolve_many<B: DocumentBackend>(store: &PostStore<B>, ui: &impl Prompt) -> Result<Selection> {
    let labels: Vec<String> = store.posts().iter().map(post_label).collect();
    let filter = |query: &str| store.search_indices(query);

    match ui.search_select("Which post?", &labels, &filter)? {
        Some(index) => match store.posts().get(index) {
            Some(post) => Ok(Selection::Chosen(post.id)),
            None => Ok(Selection::NotFound),
        },
        None => Ok(Selection::NotFound),
    }
}

fn post_label(post: &Post) -> String {
    let preview = post.preview(PREVIEW_CHARS);
    if preview.is_empty() {
        post.title.clone()
    } else {
        format!("{} {}", post.title, preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::{Answer, ScriptedPrompt};
    use crate::store::memory::MemBackend;

    fn make_store() -> PostStore<MemBackend> {
        PostStore::with_backend(MemBackend::new())
    }

    // --- Zero Posts ---

    #[test]
    fn empty_store_back_to_menu_yields_no_post() {
        let mut store = make_store();
        let ui = ScriptedPrompt::new(vec![Answer::Select(1)]);

        assert_eq!(resolve(&mut store, &ui).unwrap(), Selection::ToMenu);
        assert!(store.is_empty());
    }

    #[test]
    fn empty_store_exit_signals_termination() {
        let mut store = make_store();
        let ui = ScriptedPrompt::new(vec![Answer::Select(2)]);

        assert_eq!(resolve(&mut store, &ui).unwrap(), Selection::Terminate);
    }

    #[test]
    fn empty_store_create_now_resolves_to_the_new_post() {
        let mut store = make_store();
        let ui = ScriptedPrompt::new(vec![
            Answer::Select(0),
            Answer::input("Fresh"),
            Answer::input("made on the spot"),
            Answer::input("None"),
        ]);

        let selection = resolve(&mut store, &ui).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(selection, Selection::Chosen(store.posts()[0].id));
    }

    // --- One Post ---

    #[test]
    fn single_post_is_auto_selected_without_any_prompt() {
        let mut store = make_store();
        let id = store.create("Lone".into(), "body".into(), None).unwrap();

        // An empty script: any prompt would panic the test.
        let ui = ScriptedPrompt::new(vec![]);
        assert_eq!(resolve(&mut store, &ui).unwrap(), Selection::Chosen(id));
        assert!(ui
            .reported_contents()
            .iter()
            .any(|m| m.contains("Lone")));
    }

    // --- Many Posts ---

    fn seeded_store() -> PostStore<MemBackend> {
        let mut store = make_store();
        store
            .create("Hello world".into(), "first body".into(), None)
            .unwrap();
        store
            .create("Groceries".into(), "buy milk".into(), None)
            .unwrap();
        store
            .create("Trip notes".into(), "the world is big".into(), None)
            .unwrap();
        store
    }

    #[test]
    fn many_posts_present_the_searchable_list() {
        let mut store = seeded_store();
        let expected = store.posts()[1].id;
        let ui = ScriptedPrompt::new(vec![Answer::search("milk", 0)]);

        assert_eq!(
            resolve(&mut store, &ui).unwrap(),
            Selection::Chosen(expected)
        );
    }

    #[test]
    fn search_picks_among_filtered_matches_in_store_order() {
        let mut store = seeded_store();
        // "world" matches posts 0 and 2; pick the second match.
        let expected = store.posts()[2].id;
        let ui = ScriptedPrompt::new(vec![Answer::search("world", 1)]);

        assert_eq!(
            resolve(&mut store, &ui).unwrap(),
            Selection::Chosen(expected)
        );
    }

    #[test]
    fn dismissing_the_list_resolves_to_not_found() {
        let mut store = seeded_store();
        let ui = ScriptedPrompt::new(vec![Answer::Dismiss]);

        assert_eq!(resolve(&mut store, &ui).unwrap(), Selection::NotFound);
    }

    #[test]
    fn unmatched_query_resolves_to_not_found() {
        let mut store = seeded_store();
        let ui = ScriptedPrompt::new(vec![Answer::search("zzzzz", 0)]);

        assert_eq!(resolve(&mut store, &ui).unwrap(), Selection::NotFound);
    }
}
