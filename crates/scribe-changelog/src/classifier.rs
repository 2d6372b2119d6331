//! Commit classification
//!
//! Groups commits into sections by type and sub-headings by scope. Commits
//! that do not parse, or whose type is not mapped, are left out. Scopes that
//! are not mapped fall back to the unscoped group.

use tracing::{debug, info, instrument};

use crate::mapping::Mapping;
use crate::parser::{capitalize_first, CommitParser, ConventionalParser};
use crate::types::{ClassifiedResult, Entry, RawCommit, TypeBucket};

/// Sorts commits into type buckets and scope groups
pub struct Classifier {
    parser: Box<dyn CommitParser>,
    types: Mapping,
    scopes: Mapping,
}

impl Classifier {
    /// Create a classifier with the conventional header parser
    pub fn new(types: Mapping, scopes: Mapping) -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
            types,
            scopes,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Classify commits, keeping their relative order within each group
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn classify(&self, commits: &[RawCommit]) -> ClassifiedResult {
        let mut buckets: Vec<TypeBucket> = Vec::new();
        let mut dropped = 0usize;

        for commit in commits {
            let Some(header) = self.parser.parse(&commit.message) else {
                debug!(
                    reason = "no_colon",
                    message = %first_line(&commit.message),
                    "skipping commit"
                );
                dropped += 1;
                continue;
            };

            let Some(commit_type) = self.types.get(&header.commit_type) else {
                debug!(
                    reason = "unmapped_type",
                    commit_type = %header.commit_type,
                    "skipping commit"
                );
                dropped += 1;
                continue;
            };

            let (scope, scope_title) = match self.scopes.get(&header.scope) {
                Some(mapped) if !header.scope.is_empty() => {
                    (mapped.key.as_str(), mapped.name.as_str())
                }
                _ => ("", ""),
            };

            let entry = Entry {
                message: capitalize_first(&header.subject),
                link: commit.link.clone(),
            };

            match buckets.iter_mut().find(|b| b.title == commit_type.name) {
                Some(bucket) => bucket.push(scope, scope_title, entry),
                None => {
                    let mut bucket = TypeBucket::new(&commit_type.name);
                    bucket.push(scope, scope_title, entry);
                    buckets.push(bucket);
                }
            }
        }

        // Stable sorts keep input order for equal ranks
        buckets.sort_by_key(|b| self.types.name_position(&b.title));
        let scope_rank = |scope: &str| match scope {
            "" => 0,
            _ => self.scopes.position(scope).map_or(usize::MAX, |p| p + 1),
        };
        for bucket in &mut buckets {
            bucket.scopes.sort_by_key(|g| scope_rank(&g.scope));
        }

        let result = ClassifiedResult { buckets };
        info!(
            classified = result.entry_count(),
            dropped,
            sections = result.buckets.len(),
            "commits classified"
        );
        result
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParsedHeader;

    fn classifier(types: &str, scopes: &str) -> Classifier {
        Classifier::new(Mapping::parse(types), Mapping::parse(scopes))
    }

    fn commits(messages: &[&str]) -> Vec<RawCommit> {
        messages
            .iter()
            .enumerate()
            .map(|(i, m)| RawCommit::new(*m).with_link(format!("https://example.com/{i}")))
            .collect()
    }

    fn messages(result: &ClassifiedResult, title: &str, scope: &str) -> Vec<String> {
        result
            .bucket(title)
            .and_then(|b| b.scopes.iter().find(|g| g.scope == scope))
            .map(|g| g.entries.iter().map(|e| e.message.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_classify_example() {
        let c = classifier("feat:Features,fix:Bug Fixes", "ui:UI");
        let result = c.classify(&commits(&[
            "feat(ui): add button",
            "fix: null check",
            "chore: cleanup",
        ]));

        assert_eq!(result.buckets.len(), 2);
        assert_eq!(result.buckets[0].title, "Features");
        assert_eq!(result.buckets[0].scopes[0].scope, "ui");
        assert_eq!(result.buckets[0].scopes[0].title, "UI");
        assert_eq!(messages(&result, "Features", "ui"), ["Add button"]);
        assert_eq!(result.buckets[1].title, "Bug Fixes");
        assert_eq!(messages(&result, "Bug Fixes", ""), ["Null check"]);
        assert!(result.bucket("chore").is_none());
    }

    #[test]
    fn test_commits_without_colon_dropped() {
        let c = classifier("feat:Features", "");
        let result = c.classify(&commits(&["feat add thing", "Initial commit"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_unmapped_types_dropped() {
        let c = classifier("feat:Features", "");
        let result = c.classify(&commits(&["chore: deps", "Feat: wrong case", "feat: yes"]));
        assert_eq!(result.entry_count(), 1);
        assert_eq!(messages(&result, "Features", ""), ["Yes"]);
    }

    #[test]
    fn test_buckets_follow_mapping_order() {
        let c = classifier("feat:Features,fix:Bug Fixes,docs:Docs", "");
        let result = c.classify(&commits(&["docs: readme", "fix: crash", "feat: thing"]));
        let titles: Vec<_> = result.buckets.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Features", "Bug Fixes", "Docs"]);
    }

    #[test]
    fn test_empty_types_produce_no_bucket() {
        let c = classifier("feat:Features,fix:Bug Fixes,docs:Docs", "");
        let result = c.classify(&commits(&["docs: readme"]));
        assert_eq!(result.buckets.len(), 1);
        assert_eq!(result.buckets[0].title, "Docs");
    }

    #[test]
    fn test_scope_order_unscoped_first() {
        let c = classifier("feat:Features", "api:API,ui:UI");
        let result = c.classify(&commits(&[
            "feat(ui): b",
            "feat(api): a",
            "feat: c",
            "feat(ui): d",
        ]));

        let scopes: Vec<_> = result.buckets[0]
            .scopes
            .iter()
            .map(|g| g.scope.as_str())
            .collect();
        assert_eq!(scopes, ["", "api", "ui"]);
        assert_eq!(messages(&result, "Features", "ui"), ["B", "D"]);
    }

    #[test]
    fn test_unmapped_scope_folds_into_unscoped() {
        let c = classifier("fix:Fixes", "api:API");
        let result = c.classify(&commits(&["fix(typo): one", "fix: two", "fix(api): three"]));
        assert_eq!(messages(&result, "Fixes", ""), ["One", "Two"]);
        assert_eq!(messages(&result, "Fixes", "api"), ["Three"]);
    }

    #[test]
    fn test_no_scope_mapping_means_all_unscoped() {
        let c = classifier("fix:Fixes", "");
        let result = c.classify(&commits(&["fix(api): one", "fix(ui): two"]));
        assert_eq!(result.buckets[0].scopes.len(), 1);
        assert_eq!(messages(&result, "Fixes", ""), ["One", "Two"]);
    }

    #[test]
    fn test_order_is_stable() {
        let c = classifier("fix:Fixes", "");
        let input = commits(&["fix: 3", "fix: 1", "fix: 2"]);
        let result = c.classify(&input);
        assert_eq!(messages(&result, "Fixes", ""), ["3", "1", "2"]);
        let links: Vec<_> = result.buckets[0].scopes[0]
            .entries
            .iter()
            .map(|e| e.link.as_str())
            .collect();
        assert_eq!(
            links,
            ["https://example.com/0", "https://example.com/1", "https://example.com/2"]
        );
    }

    #[test]
    fn test_shared_display_name_merges_buckets() {
        let c = classifier("feat:Changes,fix:Fixes,perf:Changes", "");
        let result = c.classify(&commits(&["perf: faster", "fix: bug", "feat: new"]));
        let titles: Vec<_> = result.buckets.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Changes", "Fixes"]);
        assert_eq!(messages(&result, "Changes", ""), ["Faster", "New"]);
    }

    #[test]
    fn test_body_never_classified() {
        let c = classifier("feat:Features", "api:API");
        let result = c.classify(&commits(&["feat(api): do X\n\nlonger body text"]));
        assert_eq!(messages(&result, "Features", "api"), ["Do X"]);
    }

    #[test]
    fn test_empty_subject_is_safe() {
        let c = classifier("fix:Fixes", "");
        let result = c.classify(&commits(&["fix:   "]));
        assert_eq!(messages(&result, "Fixes", ""), [""]);
    }

    #[test]
    fn test_custom_parser() {
        struct Uppercase;
        impl CommitParser for Uppercase {
            fn parse(&self, message: &str) -> Option<ParsedHeader> {
                let (t, s) = message.split_once(' ')?;
                Some(ParsedHeader {
                    commit_type: t.to_lowercase(),
                    scope: String::new(),
                    subject: s.to_string(),
                })
            }
        }

        let c = classifier("fix:Fixes", "").with_parser(Uppercase);
        let result = c.classify(&commits(&["FIX broken thing"]));
        assert_eq!(messages(&result, "Fixes", ""), ["Broken thing"]);
    }
}
