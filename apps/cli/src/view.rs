//! Rendering - pure functions from state to text, so the view can be
//! asserted in tests without a terminal.

use scribe_core::domain::{Post, User};
use scribe_core::store::FetchStatus;

/// Entry screen shown while no credential is present.
pub fn render_welcome() -> String {
    let mut out = String::new();
    out.push_str("Welcome to scribe.\n");
    out.push_str("You are not logged in. Available commands:\n");
    out.push_str("  login     sign in to an existing account\n");
    out.push_str("  register  create a new account\n");
    out.push_str("  help      show this message\n");
    out.push_str("  quit      leave\n");
    out
}

pub fn render_help(authenticated: bool) -> String {
    if !authenticated {
        return render_welcome();
    }
    let mut out = String::new();
    out.push_str("Commands:\n");
    out.push_str("  list          refresh and show all posts\n");
    out.push_str("  new           write a new post\n");
    out.push_str("  edit <id>     rework one of your posts\n");
    out.push_str("  delete <id>   remove one of your posts\n");
    out.push_str("  whoami        show the current account\n");
    out.push_str("  logout        sign out\n");
    out.push_str("  help, quit\n");
    out
}

/// The post list in server order, with edit/delete affordances only on
/// the viewer's own posts.
pub fn render_post_list(posts: &[Post], viewer: &User) -> String {
    if posts.is_empty() {
        return "No posts yet. Type 'new' to write the first one.\n".to_string();
    }

    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        out.push_str(&render_post(post, viewer));
    }
    out
}

fn render_post(post: &Post, viewer: &User) -> String {
    let mut out = format!("  #{} {} - by {}", post.id, post.title, post.author_name());
    if post.is_owned_by(viewer.id) {
        out.push_str(&format!("  [yours: edit {0} / delete {0}]", post.id));
    }
    out.push('\n');
    for line in post.content.lines() {
        out.push_str("      ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn render_status(status: FetchStatus) -> &'static str {
    match status {
        FetchStatus::Idle => "posts not loaded yet",
        FetchStatus::Loading => "loading posts...",
        FetchStatus::Succeeded => "posts up to date",
        FetchStatus::Failed => "last refresh failed - showing the previous list",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    fn post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            title: format!("post {id}"),
            content: "body".to_string(),
            user_id,
            author: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn own_posts_show_edit_and_delete_controls() {
        let rendered = render_post_list(&[post(5, 1)], &viewer());
        assert!(rendered.contains("edit 5"));
        assert!(rendered.contains("delete 5"));
    }

    #[test]
    fn foreign_posts_hide_the_controls() {
        let rendered = render_post_list(&[post(5, 2)], &viewer());
        assert!(!rendered.contains("edit 5"));
        assert!(!rendered.contains("delete 5"));
    }

    #[test]
    fn mixed_list_gates_per_post() {
        let rendered = render_post_list(&[post(5, 2), post(6, 1)], &viewer());
        assert!(!rendered.contains("edit 5"));
        assert!(rendered.contains("edit 6"));
    }

    #[test]
    fn welcome_screen_offers_only_entry_points() {
        let rendered = render_welcome();
        assert!(rendered.contains("login"));
        assert!(rendered.contains("register"));
        assert!(!rendered.contains("edit"));
        assert!(!rendered.contains("delete"));
    }

    #[test]
    fn empty_list_renders_a_hint() {
        let rendered = render_post_list(&[], &viewer());
        assert!(rendered.contains("No posts yet"));
    }
}
