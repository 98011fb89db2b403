//! @mention resolution and linking
//!
//! A [`MentionResolver`] finds the usernames referenced in a piece of text;
//! [`link_mentions`] rewrites those references into profile links.

use crate::error::{RemarkError, Result};
use crate::repository::UserRepository;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

const MENTION_PATTERN: &str = r"@([A-Za-z0-9_-]+)";

/// Finds valid usernames mentioned in free text
pub trait MentionResolver: Send + Sync {
    /// Return the set of existing usernames referenced as `@name`
    fn extract_mentioned_usernames(&self, text: &str) -> Result<BTreeSet<String>>;
}

/// Resolver that validates `@name` tokens against the user repository
pub struct UserMentionResolver {
    users: Arc<dyn UserRepository>,
    pattern: Regex,
    max_username_length: usize,
}

impl UserMentionResolver {
    /// Create a resolver backed by the given user repository
    pub fn new(users: Arc<dyn UserRepository>, max_username_length: usize) -> Result<Self> {
        let pattern = Regex::new(MENTION_PATTERN)
            .map_err(|e| RemarkError::Mention(format!("invalid mention pattern: {}", e)))?;
        Ok(Self {
            users,
            pattern,
            max_username_length,
        })
    }

    /// Candidate names in order of first appearance, without validation
    fn candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut seen = BTreeSet::new();
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| name.len() <= self.max_username_length)
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

impl MentionResolver for UserMentionResolver {
    fn extract_mentioned_usernames(&self, text: &str) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();

        for candidate in self.candidates(text) {
            let user = self.users.get_by_name(candidate).map_err(|e| {
                RemarkError::Mention(format!("lookup of '{}' failed: {}", candidate, e))
            })?;

            match user {
                Some(user) => {
                    names.insert(user.name);
                }
                None => debug!("Ignoring mention of unknown user '{}'", candidate),
            }
        }

        Ok(names)
    }
}

/// Replace every `@name` for the given usernames with a profile link.
///
/// The text is scanned once from left to right. At each `@` the longest
/// username that literally follows it is linked; text produced by a
/// replacement is never scanned again.
pub fn link_mentions(text: &str, usernames: &BTreeSet<String>, member_path: &str) -> String {
    let mut names: Vec<&str> = usernames
        .iter()
        .map(String::as_str)
        .filter(|n| !n.is_empty())
        .collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    if names.is_empty() {
        return text.to_string();
    }

    let mut linked = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('@') {
        linked.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match names.iter().find(|name| after.starts_with(**name)) {
            Some(name) => {
                linked.push_str(&format!("@<a href='{}{}'>{}</a>", member_path, name, name));
                rest = &after[name.len()..];
            }
            None => {
                linked.push('@');
                rest = after;
            }
        }
    }

    linked.push_str(rest);
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryRepository;
    use crate::types::{User, UserId};
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::from_string(id),
            email: format!("{}@example.com", name),
            name: name.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn test_link_single_mention() {
        let linked = link_mentions("@alice hello", &names(&["alice"]), "/member/");
        assert_eq!(linked, "@<a href='/member/alice'>alice</a> hello");
    }

    #[test]
    fn test_link_every_occurrence() {
        let linked = link_mentions("@bob and @bob again", &names(&["bob"]), "/member/");
        assert_eq!(
            linked,
            "@<a href='/member/bob'>bob</a> and @<a href='/member/bob'>bob</a> again"
        );
    }

    #[test]
    fn test_overlapping_names_prefer_longest() {
        let linked = link_mentions("@al meets @alice", &names(&["al", "alice"]), "/member/");
        assert_eq!(
            linked,
            "@<a href='/member/al'>al</a> meets @<a href='/member/alice'>alice</a>"
        );
    }

    #[test]
    fn test_empty_names_leave_text_unchanged() {
        let text = "mail me at x@y.com, @nobody";
        assert_eq!(link_mentions(text, &BTreeSet::new(), "/member/"), text);
    }

    #[test]
    fn test_unresolved_mentions_untouched() {
        let linked = link_mentions("@carol @alice", &names(&["alice"]), "/u/");
        assert_eq!(linked, "@carol @<a href='/u/alice'>alice</a>");
    }

    #[test]
    fn test_trailing_at_sign() {
        assert_eq!(link_mentions("ends with @", &names(&["alice"]), "/member/"), "ends with @");
    }

    #[test]
    fn test_resolver_keeps_only_existing_users() {
        let repo = Arc::new(MemoryRepository::new());
        repo.add_user(user("u1", "alice"));
        repo.add_user(user("u2", "bob"));

        let resolver = UserMentionResolver::new(repo, 64).unwrap();
        let found = resolver
            .extract_mentioned_usernames("hi @alice, @ghost and @bob! @alice")
            .unwrap();

        assert_eq!(found, names(&["alice", "bob"]));
    }

    #[test]
    fn test_resolver_skips_overlong_tokens() {
        let repo = Arc::new(MemoryRepository::new());
        repo.add_user(user("u1", "averyveryverylongname"));

        let resolver = UserMentionResolver::new(repo, 8).unwrap();
        let found = resolver
            .extract_mentioned_usernames("@averyveryverylongname")
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_resolver_lookup_failure() {
        let repo = Arc::new(MemoryRepository::new());
        repo.fail_user_lookups();

        let resolver = UserMentionResolver::new(repo, 64).unwrap();
        let result = resolver.extract_mentioned_usernames("@alice");
        assert!(matches!(result, Err(RemarkError::Mention(_))));
    }

    #[test]
    fn test_resolver_no_mentions_skips_lookups() {
        let repo = Arc::new(MemoryRepository::new());
        repo.fail_user_lookups();

        let resolver = UserMentionResolver::new(repo, 64).unwrap();
        assert!(resolver.extract_mentioned_usernames("plain text").unwrap().is_empty());
    }
}
