//! Compiled grouping rules

use regex::Regex;
use smallvec::SmallVec;

use crate::classify::is_dialable;
use crate::region::config::FormatRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplatePart {
    Literal(char),
    /// Zero-based group index
    Group(usize),
}

/// A grouping rule ready for matching and filling
#[derive(Debug, Clone)]
pub struct NumberFormat {
    leading: Option<Regex>,
    groups: SmallVec<[usize; 6]>,
    parts: Vec<TemplatePart>,
    capacity: usize,
}

impl NumberFormat {
    /// Compile a rule, reporting what is wrong with it
    pub fn compile(rule: &FormatRule) -> Result<Self, String> {
        if rule.groups.is_empty() {
            return Err("at least one group is required".to_string());
        }
        if rule.groups.contains(&0) {
            return Err("group sizes must be positive".to_string());
        }

        let leading = match &rule.leading_digits {
            Some(pattern) => Some(
                Regex::new(&format!("^(?:{pattern})"))
                    .map_err(|e| format!("invalid leading_digits '{pattern}': {e}"))?,
            ),
            None => None,
        };

        let parts = parse_template(&rule.template, rule.groups.len())?;

        Ok(Self {
            leading,
            groups: rule.groups.iter().copied().collect(),
            parts,
            capacity: rule.groups.iter().sum(),
        })
    }

    /// Maximum number of national digits this rule can place
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this rule can format `national`
    pub fn applies_to(&self, national: &str) -> bool {
        national.len() <= self.capacity
            && self
                .leading
                .as_ref()
                .map_or(true, |re| re.is_match(national))
    }

    /// Place `national` into the template
    ///
    /// Literals are only written when another digit follows them, so a
    /// partially typed number never ends in a separator.
    pub fn fill(&self, national: &str) -> String {
        let mut out = String::with_capacity(national.len() + self.parts.len());
        let mut digits = national.chars();
        let mut remaining = national.chars().count();

        for part in &self.parts {
            if remaining == 0 {
                break;
            }
            match *part {
                TemplatePart::Literal(ch) => out.push(ch),
                TemplatePart::Group(index) => {
                    let take = self.groups[index].min(remaining);
                    out.extend(digits.by_ref().take(take));
                    remaining -= take;
                }
            }
        }

        // Digits beyond the last group (capacity exceeded) are not placed
        out
    }
}

fn parse_template(template: &str, group_count: usize) -> Result<Vec<TemplatePart>, String> {
    let mut parts = Vec::with_capacity(template.len());
    let mut next_group = 0;
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch == '$' {
            let index = chars
                .next()
                .and_then(|d| d.to_digit(10))
                .ok_or_else(|| format!("'$' must be followed by a group number in '{template}'"))?
                as usize;
            if index != next_group + 1 {
                return Err(format!(
                    "template '{template}' must reference groups in order, expected ${}",
                    next_group + 1
                ));
            }
            parts.push(TemplatePart::Group(next_group));
            next_group += 1;
        } else if is_dialable(ch) {
            return Err(format!("template literal '{ch}' is not a separator"));
        } else {
            parts.push(TemplatePart::Literal(ch));
        }
    }

    if next_group != group_count {
        return Err(format!(
            "template '{template}' references {next_group} of {group_count} groups"
        ));
    }

    Ok(parts)
}
