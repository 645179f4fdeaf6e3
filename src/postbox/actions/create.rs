use uuid::Uuid;

use crate::error::Result;
use crate::model::{normalize_author, DEFAULT_TITLE, NO_AUTHOR};
use crate::prompt::{Message, Prompt};
use crate::store::{DocumentBackend, PostStore};

pub fn run<B: DocumentBackend>(store: &mut PostStore<B>, ui: &impl Prompt) -> Result<Uuid> {
    let title = ui.input("Enter post title", Some(DEFAULT_TITLE), false)?;
    let content = ui.input("Enter post content", None, true)?;
    let author = ui.input("Enter post author", Some(NO_AUTHOR), false)?;

    ui.report(&Message::info("Creating post..."));
    let id = store.create(title.clone(), content, normalize_author(&author))?;
    ui.report(&Message::success(format!(
        "Post [{}] created successfully!",
        title
    )));
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::{Answer, ScriptedPrompt};
    use crate::store::memory::MemBackend;

    fn make_store() -> PostStore<MemBackend> {
        PostStore::with_backend(MemBackend::new())
    }

    #[test]
    fn sentinel_author_is_stored_as_absent() {
        let mut store = make_store();
        let ui = ScriptedPrompt::new(vec![
            Answer::input("Hello"),
            Answer::input("World"),
            Answer::input("None"),
        ]);

        let id = run(&mut store, &ui).unwrap();

        let post = store.find(&id).unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.author, None);
        assert!(post.date.is_some());
    }

    #[test]
    fn blank_title_falls_back_to_the_default() {
        let mut store = make_store();
        let ui = ScriptedPrompt::new(vec![
            Answer::input(""),
            Answer::input("some content"),
            Answer::input("Ada"),
        ]);

        let id = run(&mut store, &ui).unwrap();

        let post = store.find(&id).unwrap();
        assert_eq!(post.title, DEFAULT_TITLE);
        assert_eq!(post.author.as_deref(), Some("Ada"));
    }

    #[test]
    fn reports_the_created_title() {
        let mut store = make_store();
        let ui = ScriptedPrompt::new(vec![
            Answer::input("Launch day"),
            Answer::input("we shipped"),
            Answer::input("None"),
        ]);

        run(&mut store, &ui).unwrap();

        assert!(ui
            .reported_contents()
            .iter()
            .any(|m| m.contains("Launch day")));
    }
}
