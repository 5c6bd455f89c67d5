use crate::policy::Combination;
use crate::types::scoring::Score;

pub fn combine(combination: Combination, completeness: f64, easiness: f64) -> Score {
    let score = match combination {
        Combination::ArithmeticMean => (completeness + easiness) / 2.0,
        Combination::HarmonicMean => {
            let sum = completeness + easiness;
            // Both sub-scores are zero; the formula is undefined there.
            if sum == 0.0 {
                return Score::zero();
            }
            2.0 * completeness * easiness / sum
        }
    };
    Score::new(score.clamp(0.0, 1.0), completeness, easiness)
}
