//! arXiv `search_query` construction.
//!
//! Field values are inserted verbatim. Nothing is quoted or escaped, so a value
//! containing `AND`, `:` or parentheses changes the meaning of the query.

use crate::models::QueryFields;

/// Boolean connective between clauses
const CONNECTIVE: &str = " AND ";

/// Build a boolean query from the populated fields, in the order
/// topic, author, category, year. Returns an empty string when nothing is set.
pub fn build_search_query(fields: &QueryFields) -> String {
    let clauses = [
        present(&fields.topic).map(|topic| format!("all:{}", topic)),
        present(&fields.author).map(|author| format!("au:{}", author)),
        present(&fields.category).map(|category| format!("cat:{}", category)),
        present(&fields.year).map(year_clause),
    ];

    clauses
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(CONNECTIVE)
}

/// Whole-year `submittedDate` range in arXiv's `YYYYMMDDHHMM` format (UTC)
pub fn year_clause(year: &str) -> String {
    format!("submittedDate:[{year}01010000 TO {year}12312359]")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(topic: &str, author: &str, category: &str, year: &str) -> QueryFields {
        QueryFields {
            topic: Some(topic.to_string()),
            author: Some(author.to_string()),
            category: Some(category.to_string()),
            year: Some(year.to_string()),
        }
    }

    #[test]
    fn test_year_only() {
        let query = build_search_query(&QueryFields::new().year("2023"));
        assert_eq!(query, "submittedDate:[202301010000 TO 202312312359]");
    }

    #[test]
    fn test_all_fields_in_order() {
        let query = build_search_query(&fields("deep learning", "LeCun", "cs.AI", "2023"));
        assert_eq!(
            query,
            "all:deep learning AND au:LeCun AND cat:cs.AI AND submittedDate:[202301010000 TO 202312312359]"
        );
    }

    #[test]
    fn test_empty_fields_produce_empty_query() {
        assert_eq!(build_search_query(&QueryFields::new()), "");
        assert_eq!(build_search_query(&fields("", "", "", "")), "");
    }

    #[test]
    fn test_partial_fields_have_no_stray_connectives() {
        let query = build_search_query(&QueryFields::new().topic("transformers"));
        assert_eq!(query, "all:transformers");

        let query = build_search_query(&QueryFields::new().author("Hinton").year("2020"));
        assert_eq!(query, "au:Hinton AND submittedDate:[202001010000 TO 202012312359]");
        assert!(!query.starts_with(" AND") && !query.ends_with("AND "));
    }

    #[test]
    fn test_connective_count_and_order_for_every_combination() {
        let values = ["graphs", "Knuth", "cs.DS", "1999"];
        let prefixes = ["all:", "au:", "cat:", "submittedDate:"];

        for mask in 0u8..16 {
            let pick = |i: usize| {
                if mask & (1 << i) != 0 {
                    Some(values[i].to_string())
                } else {
                    None
                }
            };
            let query = build_search_query(&QueryFields {
                topic: pick(0),
                author: pick(1),
                category: pick(2),
                year: pick(3),
            });

            let populated = mask.count_ones() as usize;
            assert_eq!(query.matches(" AND ").count(), populated.saturating_sub(1), "{query}");

            let positions: Vec<usize> = prefixes
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, prefix)| query.find(prefix).expect("clause present"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{query}");
        }
    }

    #[test]
    fn test_values_are_not_escaped() {
        let query = build_search_query(&QueryFields::new().topic("a AND (b:c)"));
        assert_eq!(query, "all:a AND (b:c)");
    }
}
