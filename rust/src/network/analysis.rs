//! Pipeline orchestration: validated task records in, full analysis out.

use rustc_hash::FxHashSet;

use crate::config::AnalysisConfig;
use crate::interner::TaskId;
use crate::models::{NetworkAnalysis, Task, TaskReport};
use crate::{log_checks, log_stages};

use super::{
    compute_floats, compute_schedule, critical_tasks, find_critical_paths, topological_order,
    NetworkError, TaskGraph,
};

/// Run the full CPM pipeline over a validated task list.
///
/// Stages run to completion in fixed order: graph construction and
/// finalization, topological ordering, forward/backward passes, float
/// derivation, then critical task and path identification. Any stage
/// error aborts the run with no partial result. Re-running on an
/// identically declared task list produces identical output.
pub fn analyze(tasks: &[Task], config: &AnalysisConfig) -> Result<NetworkAnalysis, NetworkError> {
    let verbosity = config.verbosity;

    let mut graph = TaskGraph::with_capacity(tasks.len());
    for task in tasks {
        graph.add_task(&task.name, task.duration, &task.predecessors)?;
    }
    let network = graph.finalize()?;
    log_stages!(verbosity, "validated {} tasks", network.len());

    let order = topological_order(&network)?;
    let mut schedule = compute_schedule(&network, &order)?;
    compute_floats(&network, &mut schedule);
    log_stages!(
        verbosity,
        "minimum project duration: {}",
        schedule.project_duration
    );

    let start = network.start_task()?;
    let critical = critical_tasks(&schedule, config.tolerance);
    let critical_set: FxHashSet<TaskId> = critical.iter().copied().collect();
    let paths = find_critical_paths(&network, &schedule, start, config.tolerance);
    if paths.is_empty() {
        log_stages!(
            verbosity,
            "warning: start task {:?} has nonzero total float; no critical paths found",
            network.name(start)
        );
    }

    let mut reports = Vec::with_capacity(network.len());
    for id in 0..network.len() as TaskId {
        let idx = id as usize;
        let timing = &schedule.timings[idx];
        log_checks!(
            verbosity,
            "{}: ES={} EF={} LS={} LF={} FF={} TF={}",
            network.name(id),
            timing.early_start,
            timing.early_finish,
            timing.late_start,
            timing.late_finish,
            timing.free_float,
            timing.total_float
        );
        reports.push(TaskReport {
            name: network.name(id).to_string(),
            duration: network.durations[idx],
            predecessors: network.predecessors[idx]
                .iter()
                .map(|&p| network.name(p).to_string())
                .collect(),
            early_start: timing.early_start,
            early_finish: timing.early_finish,
            late_start: timing.late_start,
            late_finish: timing.late_finish,
            free_float: timing.free_float,
            total_float: timing.total_float,
            on_critical_path: critical_set.contains(&id),
        });
    }

    Ok(NetworkAnalysis {
        project_duration: schedule.project_duration,
        tasks: reports,
        critical_tasks: critical
            .iter()
            .map(|&id| network.name(id).to_string())
            .collect(),
        critical_paths: paths
            .iter()
            .map(|path| path.iter().map(|&id| network.name(id).to_string()).collect())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(name: &str, duration: f64, predecessors: &[&str]) -> Task {
        Task {
            name: name.to_string(),
            duration,
            predecessors: predecessors.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn diamond() -> Vec<Task> {
        vec![
            make_task("A", 3.0, &[]),
            make_task("B", 2.0, &["A"]),
            make_task("C", 4.0, &["A"]),
            make_task("D", 1.0, &["B", "C"]),
        ]
    }

    #[test]
    fn test_end_to_end_diamond() {
        let analysis = analyze(&diamond(), &AnalysisConfig::default()).unwrap();

        assert_eq!(analysis.project_duration, 8.0);
        assert_eq!(analysis.critical_tasks, vec!["A", "C", "D"]);
        assert_eq!(analysis.critical_paths, vec![vec!["A", "C", "D"]]);

        // Reports come back in declaration order
        let names: Vec<&str> = analysis.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        let b = &analysis.tasks[1];
        assert_eq!(b.total_float, 2.0);
        assert!(!b.on_critical_path);
        assert_eq!(b.predecessors, vec!["A"]);

        let c = &analysis.tasks[2];
        assert_eq!(c.total_float, 0.0);
        assert!(c.on_critical_path);
    }

    #[test]
    fn test_equal_branches_report_both_paths() {
        let tasks = vec![
            make_task("A", 1.0, &[]),
            make_task("B", 4.0, &["A"]),
            make_task("C", 4.0, &["A"]),
            make_task("D", 2.0, &["B", "C"]),
        ];
        let analysis = analyze(&tasks, &AnalysisConfig::default()).unwrap();
        assert_eq!(
            analysis.critical_paths,
            vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]
        );
        assert_eq!(analysis.critical_tasks, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_cycle_aborts_with_no_schedule() {
        let tasks = vec![make_task("a", 1.0, &["b"]), make_task("b", 1.0, &["a"])];
        assert_eq!(
            analyze(&tasks, &AnalysisConfig::default()).unwrap_err(),
            NetworkError::CycleDetected
        );
    }

    #[test]
    fn test_unknown_predecessor_names_the_offender() {
        let tasks = vec![make_task("a", 1.0, &[]), make_task("b", 1.0, &["nope"])];
        let err = analyze(&tasks, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(
            err,
            NetworkError::UnknownPredecessor {
                task: "b".to_string(),
                predecessor: "nope".to_string(),
            }
        );
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_duplicate_task_rejected() {
        let tasks = vec![make_task("a", 1.0, &[]), make_task("a", 2.0, &[])];
        assert!(matches!(
            analyze(&tasks, &AnalysisConfig::default()),
            Err(NetworkError::DuplicateTask { .. })
        ));
    }

    #[test]
    fn test_rerun_is_identical() {
        let first = analyze(&diamond(), &AnalysisConfig::default()).unwrap();
        let second = analyze(&diamond(), &AnalysisConfig::default()).unwrap();

        assert_eq!(first.project_duration, second.project_duration);
        assert_eq!(first.critical_tasks, second.critical_tasks);
        assert_eq!(first.critical_paths, second.critical_paths);
        for (a, b) in first.tasks.iter().zip(&second.tasks) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.early_start, b.early_start);
            assert_eq!(a.early_finish, b.early_finish);
            assert_eq!(a.late_start, b.late_start);
            assert_eq!(a.late_finish, b.late_finish);
            assert_eq!(a.free_float, b.free_float);
            assert_eq!(a.total_float, b.total_float);
            assert_eq!(a.on_critical_path, b.on_critical_path);
        }
    }

    #[test]
    fn test_wider_tolerance_widens_the_critical_set() {
        let config = AnalysisConfig {
            tolerance: 2.5,
            verbosity: 0,
        };
        let analysis = analyze(&diamond(), &config).unwrap();
        // B's float of 2 now counts as critical
        assert_eq!(analysis.critical_tasks, vec!["A", "B", "C", "D"]);
    }
}
