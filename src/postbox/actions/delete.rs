use super::Outcome;
use crate::error::Result;
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
    let title = post.title.clone();

    let confirmed = ui.confirm(&format!("Really delete \"{}\"?", title), false)?;
    if !confirmed {
        ui.report(&Message::warning("Deletion aborted."));
        return Ok(Outcome::Done);
    }

    ui.report(&Message::info(format!("Deleting post: [{}]...", title)));
    store.delete(&id)?;
    ui.report(&Message::success("Post deleted successfully!"));
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::{Answer, ScriptedPrompt};
    use crate::store::memory::MemBackend;

    fn store_with_posts(count: usize) -> PostStore<MemBackend> {
        let mut store = PostStore::with_backend(MemBackend::new());
        for i in 0..count {
            store
                .create(format!("Post {}", i + 1), format!("content {}", i + 1), None)
                .unwrap();
        }
        store
    }

    #[test]
    fn declining_the_confirmation_keeps_the_post() {
        let mut store = store_with_posts(1);
        let ui = ScriptedPrompt::new(vec![Answer::Confirm(false)]);

        assert_eq!(run(&mut store, &ui).unwrap(), Outcome::Done);

        assert_eq!(store.len(), 1);
        assert!(ui
            .reported_contents()
            .contains(&"Deletion aborted.".to_string()));
    }

    #[test]
    fn confirming_removes_exactly_the_targeted_post() {
        let mut store = store_with_posts(3);
        let keep_first = store.posts()[0].id;
        let keep_last = store.posts()[2].id;
        let ui = ScriptedPrompt::new(vec![Answer::search("Post 2", 0), Answer::Confirm(true)]);

        run(&mut store, &ui).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.posts()[0].id, keep_first);
        assert_eq!(store.posts()[1].id, keep_last);
    }

    #[test]
    fn dismissed_selection_deletes_nothing() {
        let mut store = store_with_posts(2);
        let ui = ScriptedPrompt::new(vec![Answer::Dismiss]);

        assert_eq!(run(&mut store, &ui).unwrap(), Outcome::Done);
        assert_eq!(store.len(), 2);
    }
}
