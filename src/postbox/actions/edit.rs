use super::Outcome;
use crate::error::Result;
use crate::model::{normalize_author, NO_AUTHOR};
use crate::prompt::{Message, Prompt};
use crate::select::{self, Selection};
use crate::store::{DocumentBackend, PostStore};

pub fn run<B: DocumentBackend>(store: &mut PostStore<B>, ui: &impl Prompt) -> Result<Outcome> {
    let id = match select::resolve(store, ui)? {
        Selection::Chosen(id) => id,
        Selection::NotFound => {
            ui.report(&Message::error("Post not found!"));
            return Ok(Outcome::Done);
        }
        Selection::ToMenu => return Ok(Outcome::ToMenu),
        Selection::Terminate => return Ok(Outcome::Terminate),
    };

    let Some(post) = store.find(&id) else {
        ui.report(&Message::error("Post not found!"));
        return Ok(Outcome::Done);
    };
    let current_title = post.title.clone();
    let current_content = post.content.clone();
    let current_author = post.author.clone().unwrap_or_else(|| NO_AUTHOR.to_string());

    let title = ui.edit_input("Edit post title", &current_title, false)?;
    let content = ui.edit_input("Edit post content", &current_content, true)?;
    let author = ui.edit_input("Edit post author", &current_author, false)?;

    let changed = store.update(&id, title, content, normalize_author(&author))?;
    if changed {
        ui.report(&Message::success("Post updated successfully!"));
    } else {
        ui.report(&Message::info("No changes detected, post left as it was."));
    }
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostDate;
    use crate::prompt::scripted::{Answer, ScriptedPrompt};
    use crate::store::memory::MemBackend;

    fn store_with_one_post() -> (PostStore<MemBackend>, uuid::Uuid) {
        let mut store = PostStore::with_backend(MemBackend::new());
        let id = store
            .create("Title".into(), "Body".into(), Some("Ada".into()))
            .unwrap();
        (store, id)
    }

    #[test]
    fn accepting_every_prefill_is_a_noop() {
        let (mut store, id) = store_with_one_post();
        let date_before = store.find(&id).unwrap().date.clone();
        let writes_before = store.backend.write_count();
        // Lone post auto-selects, then three prefills accepted as-is.
        let ui = ScriptedPrompt::new(vec![Answer::Keep, Answer::Keep, Answer::Keep]);

        assert_eq!(run(&mut store, &ui).unwrap(), Outcome::Done);

        let post = store.find(&id).unwrap();
        assert_eq!(post.date, date_before);
        assert_eq!(store.backend.write_count(), writes_before);
        assert!(ui
            .reported_contents()
            .iter()
            .any(|m| m.contains("No changes")));
    }

    #[test]
    fn content_change_refreshes_date_and_persists() {
        let (mut store, id) = store_with_one_post();
        let before = chrono::Local::now();
        let ui = ScriptedPrompt::new(vec![
            Answer::Keep,
            Answer::input("Rewritten body"),
            Answer::Keep,
        ]);

        run(&mut store, &ui).unwrap();

        let post = store.find(&id).unwrap();
        assert_eq!(post.id, id);
        assert_eq!(post.content, "Rewritten body");
        match &post.date {
            Some(PostDate::Stamped(at)) => assert!(*at >= before),
            other => panic!("expected a fresh stamp, got {:?}", other),
        }
        assert!(store
            .backend
            .document()
            .unwrap()
            .contains("Rewritten body"));
    }

    #[test]
    fn clearing_the_author_with_the_sentinel_stores_absent() {
        let (mut store, id) = store_with_one_post();
        let ui = ScriptedPrompt::new(vec![Answer::Keep, Answer::Keep, Answer::input("None")]);

        run(&mut store, &ui).unwrap();

        assert_eq!(store.find(&id).unwrap().author, None);
    }

    #[test]
    fn dismissed_selection_reports_not_found() {
        let mut store = PostStore::with_backend(MemBackend::new());
        store.create("A".into(), "a".into(), None).unwrap();
        store.create("B".into(), "b".into(), None).unwrap();
        let ui = ScriptedPrompt::new(vec![Answer::Dismiss]);

        assert_eq!(run(&mut store, &ui).unwrap(), Outcome::Done);
        assert!(ui
            .reported_contents()
            .contains(&"Post not found!".to_string()));
    }
}
