//! Free and total float derivation.

use super::{Schedule, TaskNetwork};

/// Fill in `total_float` and `free_float` on every timing.
///
/// `TF = LS - ES`. `FF = min(ES over successors) - EF`, and 0 for a
/// terminal task, which by definition has no following task to slip
/// against. Must run after the schedule passes; writes nothing else.
pub fn compute_floats(network: &TaskNetwork, schedule: &mut Schedule) {
    for idx in 0..network.len() {
        let timing = &schedule.timings[idx];
        let total_float = timing.late_start - timing.early_start;

        let successors = &network.successors[idx];
        let free_float = if successors.is_empty() {
            0.0
        } else {
            let min_successor_start = successors
                .iter()
                .map(|&s| schedule.timings[s as usize].early_start)
                .fold(f64::MAX, f64::min);
            min_successor_start - timing.early_finish
        };

        let timing = &mut schedule.timings[idx];
        timing.total_float = total_float;
        timing.free_float = free_float;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{compute_schedule, topological_order, TaskGraph};

    fn preds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn analyzed_diamond() -> (TaskNetwork, Schedule) {
        let mut graph = TaskGraph::new();
        graph.add_task("A", 3.0, &[]).unwrap();
        graph.add_task("B", 2.0, &preds(&["A"])).unwrap();
        graph.add_task("C", 4.0, &preds(&["A"])).unwrap();
        graph.add_task("D", 1.0, &preds(&["B", "C"])).unwrap();
        let network = graph.finalize().unwrap();
        let order = topological_order(&network).unwrap();
        let mut schedule = compute_schedule(&network, &order).unwrap();
        compute_floats(&network, &mut schedule);
        (network, schedule)
    }

    #[test]
    fn test_total_float() {
        let (network, schedule) = analyzed_diamond();
        let tf = |name: &str| schedule.timings[network.index.get(name).unwrap() as usize].total_float;

        assert_eq!(tf("A"), 0.0);
        assert_eq!(tf("B"), 2.0);
        assert_eq!(tf("C"), 0.0);
        assert_eq!(tf("D"), 0.0);
    }

    #[test]
    fn test_free_float() {
        let (network, schedule) = analyzed_diamond();
        let ff = |name: &str| schedule.timings[network.index.get(name).unwrap() as usize].free_float;

        // min(ES(B), ES(C)) - EF(A) = 3 - 3
        assert_eq!(ff("A"), 0.0);
        // ES(D) - EF(B) = 7 - 5
        assert_eq!(ff("B"), 2.0);
        assert_eq!(ff("C"), 0.0);
        // Terminal task: defined as zero
        assert_eq!(ff("D"), 0.0);
    }

    #[test]
    fn test_total_float_never_meaningfully_negative() {
        let (_, schedule) = analyzed_diamond();
        for timing in &schedule.timings {
            assert!(timing.total_float >= -1e-6);
        }
    }

    #[test]
    fn test_start_task_has_minimum_total_float() {
        let (network, schedule) = analyzed_diamond();
        let start = network.start_task().unwrap();
        let start_tf = schedule.timings[start as usize].total_float;
        for timing in &schedule.timings {
            assert!(start_tf <= timing.total_float + 1e-9);
        }
    }
}
