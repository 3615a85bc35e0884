use std::collections::{HashMap, HashSet};

/// Turn display text into a URL-fragment slug.
///
/// Lower-cases, turns whitespace runs into single hyphens, keeps Unicode
/// letters and digits plus `-` and `_`, and never emits leading, trailing or
/// doubled hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = !slug.is_empty();
        } else if c.is_alphanumeric() || c == '_' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(c);
        }
    }

    slug
}

/// Hands out unique anchors for one TOC generation.
///
/// The first heading with a given slug gets the clean slug; the Nth repeat is
/// slugged from `"<text> N"`. A candidate already handed out (say a literal
/// "Foo 1" heading) moves on to the next free number.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    occurrences: HashMap<String, usize>,
    emitted: HashSet<String>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register extracted display text and return its anchor
    pub fn anchor_for(&mut self, display_text: &str) -> String {
        let base = slugify(display_text);
        let counter = self.occurrences.entry(base.clone()).or_insert(0);

        let mut anchor = if *counter == 0 {
            base
        } else {
            slugify(&format!("{} {}", display_text, counter))
        };
        while self.emitted.contains(&anchor) {
            *counter += 1;
            anchor = slugify(&format!("{} {}", display_text, counter));
        }

        *counter += 1;
        self.emitted.insert(anchor.clone());
        anchor
    }
}
