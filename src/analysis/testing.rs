//! In-memory stand-ins for the GitHub and model APIs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

use crate::error::{Error, Result};
use crate::github::GitHubApi;
use crate::llm::prompts::COMPANY_PROMPT;
use crate::llm::LLMProvider;
use crate::models::{GitHubUser, RepoActivity};

pub fn profile(login: &str, bio: Option<&str>, company: Option<&str>) -> GitHubUser {
    GitHubUser {
        login: login.to_string(),
        id: None,
        name: None,
        bio: bio.map(str::to_string),
        company: company.map(str::to_string),
        location: None,
        blog: None,
        email: None,
        extra: Default::default(),
    }
}

enum FakePage {
    Page(Vec<RepoActivity>),
    Error(fn() -> Error),
}

enum FakeUser {
    Found(GitHubUser),
    Fails(fn() -> Error),
}

#[derive(Default)]
pub struct FakeGitHub {
    pages: Vec<FakePage>,
    users: HashMap<String, FakeUser>,
    user_calls: AtomicUsize,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, logins: &[&str]) -> Self {
        let page = logins.iter().map(|login| RepoActivity::by(login)).collect();
        self.pages.push(FakePage::Page(page));
        self
    }

    pub fn with_page_error(mut self, make: fn() -> Error) -> Self {
        self.pages.push(FakePage::Error(make));
        self
    }

    pub fn with_user(mut self, user: GitHubUser) -> Self {
        self.users.insert(user.login.clone(), FakeUser::Found(user));
        self
    }

    pub fn with_failing_user(mut self, login: &str, make: fn() -> Error) -> Self {
        self.users.insert(login.to_string(), FakeUser::Fails(make));
        self
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    fn activity_pages<'a>(
        &'a self,
        _owner: &'a str,
        _repo: &'a str,
    ) -> BoxStream<'a, Result<Vec<RepoActivity>>> {
        let pages: Vec<Result<Vec<RepoActivity>>> = self
            .pages
            .iter()
            .map(|page| match page {
                FakePage::Page(items) => Ok(items.clone()),
                FakePage::Error(make) => Err(make()),
            })
            .collect();
        stream::iter(pages).boxed()
    }

    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        match self.users.get(username) {
            Some(FakeUser::Found(user)) => Ok(user.clone()),
            Some(FakeUser::Fails(make)) => Err(make()),
            None => Err(Error::UserNotFound(username.to_string())),
        }
    }
}

enum FakeReply {
    Text(Option<String>),
    Fails,
}

/// Answers with the first rule whose needle appears in the profile part of
/// the prompt, `NONE` otherwise.
#[derive(Default)]
pub struct FakeLlm {
    rules: Vec<(String, FakeReply)>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FakeLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, needle: &str, reply: Option<&str>) -> Self {
        self.rules
            .push((needle.to_string(), FakeReply::Text(reply.map(str::to_string))));
        self
    }

    pub fn with_failure(mut self, needle: &str) -> Self {
        self.rules.push((needle.to_string(), FakeReply::Fails));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for FakeLlm {
    async fn complete(&self, prompt: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let profile_part = prompt.strip_prefix(COMPANY_PROMPT).unwrap_or(prompt);
        match self.rules.iter().find(|(needle, _)| profile_part.contains(needle.as_str())) {
            Some((_, FakeReply::Text(reply))) => Ok(reply.clone()),
            Some((_, FakeReply::Fails)) => Err(Error::LLMApi("model unavailable".to_string())),
            None => Ok(Some("NONE".to_string())),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }

    fn name(&self) -> &str {
        "Fake"
    }
}
