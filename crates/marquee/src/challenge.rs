//! Arithmetic challenge generation.
//!
//! A lightweight anti-automation gate: the question is trivial for a person
//! to answer and the expected value stays page-side for the submission gate
//! to check against.

use rand::Rng;
use vitrine_common::{Challenge, Operator};

/// Challenge generator service
pub struct ChallengeGenerator {
    /// Inclusive upper bound for addition operands
    add_max: i64,
    /// Inclusive upper bound for multiplication operands
    mul_max: i64,
}

impl ChallengeGenerator {
    pub fn new() -> Self {
        Self {
            add_max: 10,
            mul_max: 5,
        }
    }

    /// Generate a fresh challenge with a uniformly chosen operator.
    pub fn generate(&self) -> Challenge {
        let mut rng = rand::rng();
        let challenge = match self.pick_operator(&mut rng) {
            Operator::Add => {
                let a = rng.random_range(1..=self.add_max);
                let b = rng.random_range(1..=self.add_max);
                Challenge::from_operands(Operator::Add, a, b)
            }
            Operator::Mul => {
                // Smaller, distinct operands keep products easy mental math
                let a = rng.random_range(1..=self.mul_max);
                let mut b = rng.random_range(1..=self.mul_max);
                while b == a {
                    b = rng.random_range(1..=self.mul_max);
                }
                Challenge::from_operands(Operator::Mul, a, b)
            }
        };

        tracing::debug!(
            question = %challenge.question,
            operator = ?challenge.operator,
            "Generated challenge"
        );

        challenge
    }

    fn pick_operator(&self, rng: &mut impl Rng) -> Operator {
        if rng.random_bool(0.5) {
            Operator::Add
        } else {
            Operator::Mul
        }
    }
}

impl Default for ChallengeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pull the operands back out of the question text
    fn parse_question(question: &str) -> (i64, &str, i64) {
        let mut parts = question.split_whitespace();
        let a = parts.next().unwrap().parse().unwrap();
        let op = parts.next().unwrap();
        let b = parts.next().unwrap().parse().unwrap();
        assert_eq!(parts.next(), Some("="));
        assert_eq!(parts.next(), Some("?"));
        (a, op, b)
    }

    #[test]
    fn test_question_matches_stored_answer() {
        let generator = ChallengeGenerator::new();
        for _ in 0..200 {
            let challenge = generator.generate();
            let (a, op, b) = parse_question(&challenge.question);
            match op {
                "+" => {
                    assert_eq!(challenge.operator, Operator::Add);
                    assert_eq!(challenge.answer, a + b);
                    assert!((1..=10).contains(&a));
                    assert!((1..=10).contains(&b));
                }
                "x" => {
                    assert_eq!(challenge.operator, Operator::Mul);
                    assert_eq!(challenge.answer, a * b);
                    assert!((1..=5).contains(&a));
                    assert!((1..=5).contains(&b));
                    assert_ne!(a, b, "multiplication operands must differ");
                }
                other => panic!("unexpected operator {other}"),
            }
        }
    }

    #[test]
    fn test_both_operators_appear() {
        let generator = ChallengeGenerator::new();
        let mut saw_add = false;
        let mut saw_mul = false;
        for _ in 0..200 {
            match generator.generate().operator {
                Operator::Add => saw_add = true,
                Operator::Mul => saw_mul = true,
            }
        }
        assert!(saw_add && saw_mul);
    }
}
