use crate::error::{ReposplatError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;

/// A compiled list of gitignore-style patterns evaluated against
/// forward-slash paths relative to a fixed root.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
    // For every glob in `set`: the index of the pattern it came from and
    // whether that pattern was negated.
    origins: Vec<(usize, bool)>,
}

impl PatternSet {
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();
        let mut origins = Vec::new();

        for raw in patterns {
            let raw = raw.as_ref();
            let Some(rule) = translate(raw)? else {
                continue;
            };

            for glob in rule.globs {
                let compiled = GlobBuilder::new(&glob)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| compile_error(raw, e.kind().to_string()))?;
                builder.add(compiled);
                origins.push((kept.len(), rule.negated));
            }
            kept.push(raw.to_string());
        }

        let set = builder
            .build()
            .map_err(|e| compile_error(&kept.join(", "), e.to_string()))?;
        debug!("Compiled {} patterns: {:?}", kept.len(), kept);

        Ok(Self {
            patterns: kept,
            set,
            origins,
        })
    }

    /// The last pattern that matches decides: a plain pattern selects the
    /// path, a `!` pattern deselects it again.
    pub fn matches(&self, relative_path: &str) -> bool {
        if relative_path.is_empty() || relative_path.starts_with('/') {
            return false;
        }
        self.set
            .matches(relative_path)
            .into_iter()
            .map(|glob| self.origins[glob])
            .max_by_key(|&(pattern, _)| pattern)
            .is_some_and(|(_, negated)| !negated)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile_error(pattern: &str, reason: String) -> ReposplatError {
    ReposplatError::PatternCompile {
        pattern: pattern.to_string(),
        reason,
    }
}

struct Rule {
    globs: Vec<String>,
    negated: bool,
}

// Rewrites one gitwildmatch line into the globs that cover it: unanchored
// patterns float to any depth and every match extends to the paths below it.
fn translate(pattern: &str) -> Result<Option<Rule>> {
    let line = pattern.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (negated, line) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let dir_only = line.ends_with('/');
    let body = line.trim_end_matches('/');
    let anchored = body.contains('/');
    let body = body.trim_start_matches('/');
    if body.is_empty() {
        return Err(compile_error(pattern, "pattern matches nothing".to_string()));
    }

    let base = if anchored || body == "**" {
        body.to_string()
    } else {
        format!("**/{}", body)
    };

    let mut globs = Vec::with_capacity(2);
    if !dir_only {
        globs.push(base.clone());
    }
    if !base.ends_with("/**") {
        globs.push(format!("{}/**", base));
    } else if dir_only {
        globs.push(base);
    }
    Ok(Some(Rule { globs, negated }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> PatternSet {
        PatternSet::compile(patterns).unwrap()
    }

    #[test]
    fn test_recursive_and_root_level_matches() {
        let matcher = set(&["**/*.py", "*.txt"]);
        assert!(matcher.matches("test.py"));
        assert!(matcher.matches("sub/test.py"));
        assert!(matcher.matches("a/b/c/deep.py"));
        assert!(matcher.matches("readme.txt"));
        assert!(matcher.matches("docs/readme.txt"));
        assert!(!matcher.matches("main.rs"));
    }

    #[test]
    fn test_star_stays_within_segment() {
        let matcher = set(&["src/*.rs"]);
        assert!(matcher.matches("src/lib.rs"));
        assert!(!matcher.matches("src/core/mod.rs"));
        assert!(!matcher.matches("other/src/lib.rs"));
    }

    #[test]
    fn test_hidden_names_are_not_special() {
        let matcher = set(&["**/*.py"]);
        assert!(matcher.matches(".hidden.py"));
        assert!(matcher.matches(".config/settings.py"));
    }

    #[test]
    fn test_bare_name_matches_at_any_depth() {
        let matcher = set(&["skip.py", ".DS_Store"]);
        assert!(matcher.matches("skip.py"));
        assert!(matcher.matches("pkg/skip.py"));
        assert!(matcher.matches("a/b/.DS_Store"));
        assert!(!matcher.matches("keep.py"));
    }

    #[test]
    fn test_directory_patterns_cover_contents() {
        let matcher = set(&[".git/**", "build", "node_modules/", "/dist"]);
        assert!(matcher.matches(".git/config"));
        assert!(matcher.matches(".git/objects/ab/cdef"));
        assert!(!matcher.matches("sub/.git/config"));
        assert!(matcher.matches("build/lib/x.py"));
        assert!(matcher.matches("pkg/build/x.py"));
        assert!(matcher.matches("node_modules/left-pad/index.js"));
        assert!(!matcher.matches("node_modules"));
        assert!(matcher.matches("dist/app.py"));
        assert!(!matcher.matches("pkg/dist/app.py"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let matcher = set(&[]);
        assert!(matcher.is_empty());
        assert!(!matcher.matches("a.py"));
        assert!(!matcher.matches("sub/b.py"));
    }

    #[test]
    fn test_comments_and_blanks_are_ignored() {
        let matcher = set(&["# comment", "", "   ", "*.py"]);
        assert_eq!(matcher.len(), 1);
        assert_eq!(matcher.patterns(), &["*.py".to_string()]);
    }

    #[test]
    fn test_rejects_absolute_paths() {
        let matcher = set(&["**/*.py"]);
        assert!(!matcher.matches("/tmp/outside.py"));
        assert!(!matcher.matches(""));
    }

    #[test]
    fn test_malformed_pattern_fails_at_compile_time() {
        let err = PatternSet::compile(&["src/[abc"]).unwrap_err();
        match err {
            ReposplatError::PatternCompile { pattern, .. } => assert_eq!(pattern, "src/[abc"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_double_star_prefix_floats_to_any_depth() {
        let matcher = set(&["**.py"]);
        assert!(matcher.matches("a.py"));
        assert!(matcher.matches("src/a.py"));
        assert!(matcher.matches("a/b/c.py"));
        assert!(!matcher.matches("a/b/c.rs"));
    }

    #[test]
    fn test_negated_pattern_reverses_earlier_match() {
        let matcher = set(&["*.log", "!important.log"]);
        assert!(matcher.matches("server.log"));
        assert!(matcher.matches("logs/debug.log"));
        assert!(!matcher.matches("important.log"));
        assert!(!matcher.matches("logs/important.log"));
    }

    #[test]
    fn test_later_pattern_wins_over_negation() {
        let matcher = set(&["!keep.py", "*.py"]);
        assert!(matcher.matches("keep.py"));

        let only_negated = set(&["!keep.py"]);
        assert_eq!(only_negated.len(), 1);
        assert!(!only_negated.matches("keep.py"));
        assert!(!only_negated.matches("other.py"));
    }

    #[test]
    fn test_bare_root_pattern_is_rejected() {
        assert!(PatternSet::compile(&["/"]).is_err());
        assert!(PatternSet::compile(&["!"]).is_err());
    }

    #[test]
    fn test_matching_is_deterministic() {
        let matcher = set(&["**/*.py", "*.log"]);
        for _ in 0..3 {
            assert!(matcher.matches("pkg/mod.py"));
            assert!(!matcher.matches("pkg/mod.rs"));
        }
    }
}
