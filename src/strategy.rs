//! Optimal strategies for walking a chain of n elementary isogenies.
//!
//! A strategy is a list of n - 1 positive integers, read in pre-order: the
//! first entry b says "advance the kernel point by b elementary steps and
//! keep the intermediate point", then come the strategy for the remaining
//! n - b steps below it and the strategy for the b steps above it.
//! The walk in `crate::isogeny` consumes them in this order.
use std::sync::OnceLock;

use log::debug;

use crate::params::{params, FieldId, Role};

/// Modeled cost of one elementary kernel multiplication and of one
/// elementary isogeny evaluation, in field multiplications (S = M).
/// Role A: two doublings (8M + 4S) and a 4-isogeny evaluation (6M + 2S).
/// Role B: one tripling (7M + 5S) and a 3-isogeny evaluation (4M + 2S).
pub const fn step_costs(role: Role) -> (usize, usize) {
    match role {
        Role::A => (12, 8),
        Role::B => (12, 6),
    }
}

/// Compute an optimal strategy for `n` steps by dynamic programming over
/// S[i] = [b] ++ S[i - b] ++ S[b], minimizing
/// C[i - b] + C[b] + b*mul_cost + (i - b)*eval_cost.
pub fn optimal_strategy(n: usize, mul_cost: usize, eval_cost: usize) -> Vec<usize> {
    if n <= 1 {
        return vec![];
    }

    // S[i] and C[i] for 0 <= i <= n, index 0 unused
    let mut S: Vec<Vec<usize>> = vec![vec![], vec![]];
    let mut C: Vec<usize> = vec![0, 0];

    for i in 2..=n {
        let (mut best_b, mut best_cost) = (1, usize::MAX);
        for b in 1..i {
            let cost = C[i - b] + C[b] + b * mul_cost + (i - b) * eval_cost;
            if cost < best_cost {
                best_b = b;
                best_cost = cost;
            }
        }

        let mut s = Vec::with_capacity(i - 1);
        s.push(best_b);
        s.extend_from_slice(&S[i - best_b]);
        s.extend_from_slice(&S[best_b]);
        S.push(s);
        C.push(best_cost);
    }

    S.swap_remove(n)
}

/// Modeled cost of walking `n` steps with `strategy`, or `None` when the
/// strategy is not well formed for `n` steps.
pub fn strategy_cost(strategy: &[usize], n: usize, mul_cost: usize, eval_cost: usize) -> Option<usize> {
    fn cost_rec(s: &[usize], n: usize, p: usize, q: usize) -> Option<(usize, usize)> {
        // returns (cost, entries consumed)
        if n == 1 {
            return Some((0, 0));
        }
        let b = *s.first()?;
        if b == 0 || b >= n {
            return None;
        }
        let (c_low, used_low) = cost_rec(&s[1..], n - b, p, q)?;
        let (c_high, used_high) = cost_rec(&s[1 + used_low..], b, p, q)?;
        Some((c_low + c_high + b * p + (n - b) * q, 1 + used_low + used_high))
    }

    if n == 0 {
        return if strategy.is_empty() { Some(0) } else { None };
    }
    match cost_rec(strategy, n, mul_cost, eval_cost)? {
        (cost, used) if used == strategy.len() => Some(cost),
        _ => None,
    }
}

/// Strategy for the walk of `role` over `field`, computed on first use and
/// shared afterwards.
pub fn strategy(field: FieldId, role: Role) -> &'static [usize] {
    static P503_A: OnceLock<Vec<usize>> = OnceLock::new();
    static P503_B: OnceLock<Vec<usize>> = OnceLock::new();
    static P751_A: OnceLock<Vec<usize>> = OnceLock::new();
    static P751_B: OnceLock<Vec<usize>> = OnceLock::new();

    let cell = match (field, role) {
        (FieldId::P503, Role::A) => &P503_A,
        (FieldId::P503, Role::B) => &P503_B,
        (FieldId::P751, Role::A) => &P751_A,
        (FieldId::P751, Role::B) => &P751_B,
    };

    cell.get_or_init(|| {
        let n = params(field).domain(role).isogeny_steps;
        let (p, q) = step_costs(role);
        let s = optimal_strategy(n, p, q);
        debug!(
            "strategy for {}/{}: {} steps, modeled cost {:?}",
            field,
            role,
            n,
            strategy_cost(&s, n, p, q)
        );
        s
    })
}
