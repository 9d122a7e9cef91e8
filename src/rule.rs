use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::itemset::FrequentItemsets;
use crate::support::fraction;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub confidence: f64,
    pub support: f64,
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if the rule
    // would be above the min_confidence threshold. `itemset_count` is the
    // support count of antecedent ∪ consequent. Returns None when the
    // antecedent isn't in the frequent collection.
    pub fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        itemset_count: u32,
        frequent: &FrequentItemsets,
        min_confidence: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }

        let a_count = match frequent.count(&antecedent) {
            Some(count) if count > 0 => count,
            _ => return None,
        };

        let confidence = itemset_count as f64 / a_count as f64;
        if confidence < min_confidence {
            return None;
        }

        Some(Rule {
            antecedent,
            consequent,
            confidence,
            support: fraction(itemset_count, frequent.num_transactions()),
        })
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(&self.antecedent, itemizer),
            " => ".to_owned(),
            Item::item_vec_to_string(&self.consequent, itemizer),
        ]
        .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;
    use crate::item::Item;
    use crate::itemset::FrequentItemsets;

    #[test]
    fn test_make() {
        let a = Item::with_id(1);
        let b = Item::with_id(2);
        let mut frequent = FrequentItemsets::new(4);
        frequent.insert(vec![a], 4);
        frequent.insert(vec![b], 2);
        frequent.insert(vec![a, b], 2);

        let rule = Rule::make(vec![a], vec![b], 2, &frequent, 0.5).unwrap();
        assert_eq!(rule.confidence(), 0.5);
        assert_eq!(rule.support(), 0.5);

        assert!(Rule::make(vec![a], vec![b], 2, &frequent, 0.6).is_none());
        assert!(Rule::make(vec![], vec![b], 2, &frequent, 0.1).is_none());
        // Antecedent missing from the collection.
        assert!(Rule::make(vec![Item::with_id(3)], vec![b], 2, &frequent, 0.1).is_none());
    }

    #[test]
    fn test_equality_ignores_metrics() {
        let a = Item::with_id(1);
        let b = Item::with_id(2);
        let r1 = Rule {
            antecedent: vec![a],
            consequent: vec![b],
            confidence: 0.5,
            support: 0.1,
        };
        let mut r2 = r1.clone();
        r2.confidence = 0.9;
        assert_eq!(r1, r2);
    }
}
