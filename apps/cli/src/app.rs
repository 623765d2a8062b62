//! The interactive surface: routes user commands to the stores and
//! renders the result.
//!
//! All store mutations happen on awaited completions inside one logical
//! task; the loop never mutates state concurrently with itself.

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use scribe_core::domain::PostDraft;
use scribe_core::ports::ApiGateway;
use scribe_core::store::{CredentialStore, PostStore};

use crate::commands::Command;
use crate::state::AppState;
use crate::view;

/// Edit-draft state: `id` is `None` while creating, the post id while
/// editing.
struct Draft {
    id: Option<i64>,
    title: String,
    content: String,
}

pub struct App {
    gateway: Arc<dyn ApiGateway>,
    session: Arc<CredentialStore>,
    posts: PostStore,
    draft: Option<Draft>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            gateway: state.gateway,
            session: state.session,
            posts: PostStore::new(),
            draft: None,
        }
    }

    /// The interactive loop. Reads one command per line; `new` and
    /// `edit` follow up with prompts for the draft fields.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        if self.session.is_authenticated() {
            println!("{}", self.refresh_and_render().await);
        } else {
            println!("{}", view::render_welcome());
        }

        loop {
            print!("scribe> ");
            std::io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    println!("{message}");
                    continue;
                }
            };

            // Unauthenticated mode exposes the entry points only.
            if !self.session.is_authenticated()
                && !matches!(
                    command,
                    Command::Login | Command::Register | Command::Help | Command::Quit
                )
            {
                println!("Please login or register first.");
                continue;
            }

            match command {
                Command::Help => {
                    println!("{}", view::render_help(self.session.is_authenticated()))
                }
                Command::Quit => break,
                Command::Login => {
                    let email = prompt(&mut lines, "Email").await?;
                    let password = prompt(&mut lines, "Password").await?;
                    println!("{}", self.login(&email, &password).await);
                    self.render_current_list();
                }
                Command::Register => {
                    let username = prompt(&mut lines, "Username").await?;
                    let email = prompt(&mut lines, "Email").await?;
                    let password = prompt(&mut lines, "Password").await?;
                    println!("{}", self.register(&username, &email, &password).await);
                    self.render_current_list();
                }
                Command::Logout => println!("{}", self.logout().await),
                Command::List => println!("{}", self.refresh_and_render().await),
                Command::Whoami => println!("{}", self.whoami()),
                Command::New => {
                    self.begin_draft();
                    let title = prompt(&mut lines, "Title").await?;
                    let content = prompt(&mut lines, "Content").await?;
                    self.set_draft_text(title, content);
                    println!("{}", self.submit_draft().await);
                    self.render_current_list();
                }
                Command::Edit(id) => match self.begin_edit(id) {
                    Ok((title, content)) => {
                        let new_title = prompt_with_default(&mut lines, "Title", &title).await?;
                        let new_content =
                            prompt_with_default(&mut lines, "Content", &content).await?;
                        self.set_draft_text(new_title, new_content);
                        println!("{}", self.submit_draft().await);
                        self.render_current_list();
                    }
                    Err(message) => println!("{message}"),
                },
                Command::Delete(id) => {
                    println!("{}", self.delete_post(id).await);
                    self.render_current_list();
                }
            }
        }

        println!("Bye.");
        Ok(())
    }

    async fn login(&mut self, email: &str, password: &str) -> String {
        match self.gateway.login(email, password).await {
            Ok(credential) => {
                let username = credential.user.username.clone();
                if let Err(e) = self
                    .session
                    .set_credentials(credential.user, credential.token)
                    .await
                {
                    tracing::warn!(error = %e, "could not persist the session");
                }
                self.mount().await;
                format!("Welcome back, {username}!")
            }
            Err(e) => format!("Login failed: {e}"),
        }
    }

    async fn register(&mut self, username: &str, email: &str, password: &str) -> String {
        match self.gateway.register(username, email, password).await {
            Ok(credential) => {
                let username = credential.user.username.clone();
                if let Err(e) = self
                    .session
                    .set_credentials(credential.user, credential.token)
                    .await
                {
                    tracing::warn!(error = %e, "could not persist the session");
                }
                self.mount().await;
                format!("Account created. Welcome, {username}!")
            }
            Err(e) => format!("Registration failed: {e}"),
        }
    }

    /// Logout is purely local: clear the credential pair, keep the
    /// backend out of it.
    async fn logout(&mut self) -> String {
        if let Err(e) = self.session.logout().await {
            tracing::warn!(error = %e, "could not clear the persisted session");
        }
        self.draft = None;
        "Logged out.".to_string()
    }

    /// Entering the authenticated view: load the list. A failure is
    /// already logged by the store and shows up as a failed status.
    async fn mount(&mut self) {
        let _ = self.posts.fetch_all(self.gateway.as_ref()).await;
    }

    async fn refresh_and_render(&mut self) -> String {
        let Some(user) = self.session.user() else {
            return view::render_welcome();
        };
        match self.posts.fetch_all(self.gateway.as_ref()).await {
            Ok(()) => view::render_post_list(self.posts.posts(), &user),
            Err(e) => format!(
                "Could not load posts: {e}\n({})",
                view::render_status(self.posts.status())
            ),
        }
    }

    fn begin_draft(&mut self) {
        self.draft = Some(Draft {
            id: None,
            title: String::new(),
            content: String::new(),
        });
    }

    /// Start editing a post, pre-filling the draft from the local copy.
    fn begin_edit(&mut self, id: i64) -> Result<(String, String), String> {
        let Some(post) = self.posts.find(id) else {
            return Err(format!("No post with id {id} in the current list."));
        };
        let (title, content) = (post.title.clone(), post.content.clone());
        self.draft = Some(Draft {
            id: Some(id),
            title: title.clone(),
            content: content.clone(),
        });
        Ok((title, content))
    }

    fn set_draft_text(&mut self, title: String, content: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.title = title;
            draft.content = content;
        }
    }

    /// Submit the draft: update when it carries an id, create otherwise.
    ///
    /// Without a credential this is rejected locally - no request goes
    /// out and the draft is kept. Otherwise the draft is cleared and a
    /// reconcile fetch runs no matter how the request ended.
    async fn submit_draft(&mut self) -> String {
        if !self.session.is_authenticated() {
            return "You must be logged in to post.".to_string();
        }
        let Some(draft) = self.draft.take() else {
            return "Nothing to submit.".to_string();
        };

        let id = draft.id;
        let payload = PostDraft::new(draft.title, draft.content);
        let result = match id {
            Some(id) => self.posts.update(self.gateway.as_ref(), id, &payload).await,
            None => self.posts.create(self.gateway.as_ref(), &payload).await,
        };

        let message = match (&result, id) {
            (Ok(()), Some(id)) => format!("Post {id} updated."),
            (Ok(()), None) => "Post created.".to_string(),
            (Err(e), _) if e.is_access_denied() => {
                "Access denied: you cannot modify this post.".to_string()
            }
            (Err(e), _) => format!("Request failed: {e}"),
        };

        // Reconcile with server truth regardless of the outcome.
        let _ = self.posts.fetch_all(self.gateway.as_ref()).await;
        message
    }

    /// Same guard and reconcile pattern as submit.
    async fn delete_post(&mut self, id: i64) -> String {
        if !self.session.is_authenticated() {
            return "You must be logged in to delete.".to_string();
        }

        let message = match self.posts.delete(self.gateway.as_ref(), id).await {
            Ok(()) => format!("Post {id} deleted."),
            Err(e) if e.is_access_denied() => {
                "Access denied: you cannot delete this post.".to_string()
            }
            Err(e) => format!("Request failed: {e}"),
        };

        let _ = self.posts.fetch_all(self.gateway.as_ref()).await;
        message
    }

    fn whoami(&self) -> String {
        match self.session.user() {
            Some(user) => format!(
                "Logged in as {} <{}> (id {}).",
                user.username, user.email, user.id
            ),
            None => "Not logged in.".to_string(),
        }
    }

    fn render_current_list(&self) {
        if let Some(user) = self.session.user() {
            println!("{}", view::render_post_list(self.posts.posts(), &user));
        }
    }
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?.unwrap_or_default().trim().to_string())
}

/// Prompt that keeps the previous value on empty input.
async fn prompt_with_default(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
    current: &str,
) -> Result<String> {
    print!("{label} [{current}]: ");
    std::io::stdout().flush()?;
    let entered = lines.next_line().await?.unwrap_or_default();
    let entered = entered.trim();
    Ok(if entered.is_empty() {
        current.to_string()
    } else {
        entered.to_string()
    })
}
