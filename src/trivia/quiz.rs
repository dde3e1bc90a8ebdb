use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

/// Picks a question from `pool` that has not been served yet.
///
/// Returns `None` once every question of the pool appears in `previous`,
/// which is how a quiz normally ends. Ids in `previous` that are not part
/// of the pool are ignored. The caller owns appending the served id to the
/// history it sends with the next turn.
pub fn next_question<'a, R>(pool: &'a [Question], previous: &[i64], rng: &mut R) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let served: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<&Question> = pool.iter().filter(|q| !served.contains(&q.id)).collect();
    remaining.choose(rng).copied()
}
