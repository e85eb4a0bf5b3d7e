use std::cmp::Ordering;

use serde_json::Value;

/// Document filter, evaluated against the stored (unprojected) fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    /// Field at a dotted path equals the value.
    Equals(String, Value),
    /// Field at a dotted path equals one of the values.
    In(String, Vec<Value>),
    And(Vec<Filter>),
}

impl Filter {
    pub fn equals(path: &str, value: impl Into<Value>) -> Self {
        Filter::Equals(path.to_string(), value.into())
    }

    pub fn in_list<V: Into<Value>>(path: &str, values: impl IntoIterator<Item = V>) -> Self {
        Filter::In(path.to_string(), values.into_iter().map(Into::into).collect())
    }

    pub fn and(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::All, f) | (f, Filter::All) => f,
            (Filter::And(mut left), Filter::And(right)) => {
                left.extend(right);
                Filter::And(left)
            }
            (Filter::And(mut left), f) => {
                left.push(f);
                Filter::And(left)
            }
            (f, other) => Filter::And(vec![f, other]),
        }
    }

    pub fn matches(&self, data: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::Equals(path, expected) => lookup(data, path) == Some(expected),
            Filter::In(path, values) => match lookup(data, path) {
                Some(found) => values.contains(found),
                None => false,
            },
            Filter::And(filters) => filters.iter().all(|f| f.matches(data)),
        }
    }
}

/// Value at a dotted path inside an object, if every segment exists.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
}

/// Sort order for `find`: a dotted path, ascending unless written as
/// `-path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub path: String,
    pub descending: bool,
}

impl Sort {
    pub fn parse(spec: &str) -> Self {
        match spec.strip_prefix('-') {
            Some(path) => Sort {
                path: path.to_string(),
                descending: true,
            },
            None => Sort {
                path: spec.to_string(),
                descending: false,
            },
        }
    }

    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ord = compare_values(lookup(a, &self.path), lookup(b, &self.path));
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// Numbers compare numerically, strings lexically; missing values sort
/// last.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(v), Some(w)) if v.is_null() && w.is_null() => Ordering::Equal,
        (None | Some(Value::Null), Some(_)) => Ordering::Greater,
        (Some(_), None | Some(Value::Null)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equals_on_nested_path() {
        let doc = json!({"sectionId": "hero", "metadata": {"showSection": true}});
        assert!(Filter::equals("sectionId", "hero").matches(&doc));
        assert!(!Filter::equals("sectionId", "faq").matches(&doc));
        assert!(Filter::equals("metadata.showSection", true).matches(&doc));
        assert!(!Filter::equals("metadata.order", 1).matches(&doc));
    }

    #[test]
    fn in_and_conjunction() {
        let doc = json!({"sectionId": "team", "metadata": {"showSection": false}});
        let f = Filter::in_list("sectionId", ["hero", "team"]);
        assert!(f.matches(&doc));
        assert!(!f
            .clone()
            .and(Filter::equals("metadata.showSection", true))
            .matches(&doc));
        assert_eq!(Filter::All.and(f.clone()), f);
    }

    #[test]
    fn sort_is_numeric_with_missing_last() {
        let mut docs = vec![
            json!({"metadata": {"order": 4}}),
            json!({}),
            json!({"metadata": {"order": 3.5}}),
            json!({"metadata": {"order": 1}}),
        ];
        let sort = Sort::parse("metadata.order");
        docs.sort_by(|a, b| sort.compare(a, b));
        let orders: Vec<_> = docs.iter().map(|d| lookup(d, "metadata.order").cloned()).collect();
        assert_eq!(
            orders,
            vec![Some(json!(1)), Some(json!(3.5)), Some(json!(4)), None]
        );

        let desc = Sort::parse("-metadata.order");
        assert!(desc.descending);
        assert_eq!(desc.path, "metadata.order");
    }
}
