#[cfg(test)]
mod model_tests {
    use jiff::{
        civil::{date, DateTime},
        SignedDuration,
    };

    use crate::{
        error::PlannerError,
        models::{PinnedTask, Rating, Schedule, Task, TaskKind},
    };

    fn at(hour: i8, minute: i8) -> DateTime {
        date(2023, 1, 1).at(hour, minute, 0, 0)
    }

    fn hours(n: i64) -> SignedDuration {
        SignedDuration::from_hours(n)
    }

    fn pinned(name: &str, start: DateTime, duration: SignedDuration) -> PinnedTask {
        Task::builder(name)
            .duration(duration)
            .build_pinned(start)
            .expect("Failed to pin task")
    }

    fn create_test_schedule() -> Schedule {
        Schedule::new(at(9, 0), at(18, 0))
    }

    #[test]
    fn test_ratings_in_range_are_accepted() {
        for value in 1..=5 {
            let task = Task::builder("test")
                .complexity(value)
                .priority(value)
                .build()
                .expect("rating in range should be accepted");
            assert_eq!(i64::from(task.complexity().get()), value);
            assert_eq!(i64::from(task.priority().get()), value);
        }
    }

    #[test]
    fn test_invalid_complexity_names_field() {
        for value in [0, 6, -1] {
            let err = Task::builder("test").complexity(value).build().unwrap_err();
            assert_eq!(err.field(), Some("complexity"));
            assert!(err.to_string().contains("complexity must be between 1 and 5"));
        }
    }

    #[test]
    fn test_invalid_priority_names_field() {
        for value in [0, 6] {
            let err = Task::builder("test").priority(value).build().unwrap_err();
            assert_eq!(err.field(), Some("priority"));
            assert!(err.to_string().contains("priority must be between 1 and 5"));
        }
    }

    #[test]
    fn test_default_values() {
        let task = Task::builder("test").build().unwrap();
        assert_eq!(task.kind(), TaskKind::Regular);
        assert_eq!(task.duration(), None);
        assert_eq!(task.complexity(), Rating::MEDIUM);
        assert_eq!(task.priority(), Rating::MEDIUM);
        assert_eq!(task.description(), "");
        assert_eq!(task.deadline(), None);
        assert_eq!(task.min_start_time(), None);
        assert_eq!(task.duration_inaccuracy(), SignedDuration::ZERO);
    }

    #[test]
    fn test_negative_spans_are_rejected() {
        let err = Task::builder("test").duration(hours(-1)).build().unwrap_err();
        assert_eq!(err.field(), Some("duration"));

        let err = Task::builder("test")
            .duration_inaccuracy(SignedDuration::from_mins(-5))
            .build()
            .unwrap_err();
        assert_eq!(err.field(), Some("duration_inaccuracy"));
    }

    #[test]
    fn test_build_pinned_derives_stop() {
        let task = Task::builder("test task")
            .duration(hours(1))
            .complexity(2)
            .description("test description")
            .build_pinned(at(10, 0))
            .unwrap();

        assert_eq!(task.start(), at(10, 0));
        assert_eq!(task.stop(), at(11, 0));
        assert_eq!(task.duration(), hours(1));
        assert_eq!(task.description(), "test description");
    }

    #[test]
    fn test_pin_derives_stop() {
        let task = Task::builder("test task").duration(hours(1)).build().unwrap();
        let pinned = task.clone().pin(at(10, 0)).unwrap();

        assert_eq!(pinned.name(), "test task");
        assert_eq!(pinned.task(), &task);
        assert_eq!(pinned.stop(), at(10, 0).checked_add(hours(1)).unwrap());
    }

    #[test]
    fn test_pin_without_duration_is_a_validation_error() {
        let err = Task::builder("no length").build().unwrap().pin(at(10, 0)).unwrap_err();
        assert_eq!(err.field(), Some("duration"));

        let err = Task::builder("no length").build_pinned(at(10, 0)).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { .. }));
    }

    #[test]
    fn test_pin_past_calendar_end_is_a_time_error() {
        let err = Task::builder("forever")
            .duration(hours(1))
            .build_pinned(DateTime::MAX)
            .unwrap_err();
        assert!(matches!(err, PlannerError::Time { .. }));
    }

    #[test]
    fn test_repin_overwrites_timing() {
        let mut task = pinned("move me", at(10, 0), SignedDuration::from_mins(30));
        task.repin(at(14, 0)).unwrap();
        task.repin(at(15, 0)).unwrap();

        assert_eq!(task.start(), at(15, 0));
        assert_eq!(task.stop(), at(15, 30));
    }

    #[test]
    fn test_buffer_task() {
        let buffer = PinnedTask::buffer(at(10, 0), SignedDuration::from_mins(30)).unwrap();

        assert_eq!(buffer.kind(), TaskKind::Buffer);
        assert_eq!(buffer.name(), "buffer");
        assert_eq!(buffer.description(), "buffer between tasks, free time");
        assert_eq!(buffer.start(), at(10, 0));
        assert_eq!(buffer.stop(), at(10, 30));
    }

    #[test]
    fn test_rest_task() {
        let rest = PinnedTask::rest(at(10, 0), SignedDuration::from_mins(30)).unwrap();

        assert_eq!(rest.kind(), TaskKind::Rest);
        assert_eq!(rest.name(), "rest");
        assert_eq!(rest.description(), "free time, take a rest");
        assert_eq!(rest.stop(), at(10, 30));
    }

    #[test]
    fn test_add_task_keeps_insertion_order() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Task 1", at(10, 0), hours(1)));
        schedule.add(pinned("Task 2", at(12, 0), hours(2)));

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.tasks()[0].name(), "Task 1");
    }

    #[test]
    fn test_complete_sorts_tasks() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Task 2", at(12, 0), hours(2)));
        schedule.add(pinned("Task 1", at(10, 0), hours(1)));

        schedule.complete().unwrap();

        assert_eq!(schedule.tasks()[0].name(), "Task 1");
        assert!(schedule.tasks()[0].start() < schedule.tasks()[1].start());
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Task 2", at(12, 0), hours(2)));
        schedule.add(pinned("Task 1", at(10, 0), hours(1)));

        schedule.complete().unwrap();
        let first = schedule.clone();
        schedule.complete().unwrap();

        assert_eq!(schedule, first);
    }

    #[test]
    fn test_overlap_is_a_collision() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Task 1", at(10, 0), hours(2)));
        schedule.add(pinned("Task 2", at(11, 0), hours(1)));

        let err = schedule.check_collision().unwrap_err();
        assert!(err.is_collision());
        assert!(err.to_string().contains("Tasks collision"));
        assert!(schedule.complete().unwrap_err().is_collision());
    }

    #[test]
    fn test_containment_is_a_collision() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Long", at(10, 0), hours(4)));
        schedule.add(pinned("Inside", at(11, 0), hours(1)));

        assert!(schedule.complete().unwrap_err().is_collision());
    }

    #[test]
    fn test_task_before_window_is_a_collision() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Early", at(8, 0), hours(1)));

        match schedule.complete().unwrap_err() {
            PlannerError::Collision { task, cursor, .. } => {
                assert_eq!(task, "Early");
                assert_eq!(cursor, at(9, 0));
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_adjacent_tasks_do_not_collide() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Second", at(10, 0), hours(1)));
        schedule.add(pinned("First", at(9, 0), hours(1)));

        schedule.complete().unwrap();
        assert_eq!(schedule.end(), Some(at(11, 0)));
        assert_eq!(schedule.overrun(), None);
    }

    #[test]
    fn test_overrun_reports_excess() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Late", at(17, 0), hours(2)));
        schedule.complete().unwrap();

        assert_eq!(schedule.overrun(), Some(hours(1)));
    }

    #[test]
    fn test_empty_schedule() {
        let mut schedule = create_test_schedule();
        schedule.complete().unwrap();

        assert!(schedule.is_empty());
        assert_eq!(schedule.end(), None);
        assert_eq!(schedule.overrun(), None);
        assert!(schedule.to_string().contains("No tasks scheduled."));
    }

    #[test]
    fn test_schedule_display_table() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Write | report", at(10, 0), hours(1)));
        schedule.add(PinnedTask::buffer(at(11, 0), SignedDuration::from_mins(6)).unwrap());
        schedule.complete().unwrap();

        let output = schedule.to_string();
        assert!(output.contains("# Schedule 2023-01-01 09:00 to 2023-01-01 18:00"));
        assert!(output.contains("| Task | Name | Description | Start | Stop |"));
        assert!(output.contains("| 0 | Write \\| report |  | 2023-01-01 10:00 | 2023-01-01 11:00 |"));
        assert!(output.contains(
            "| 1 | buffer | buffer between tasks, free time | 2023-01-01 11:00 | 2023-01-01 11:06 |"
        ));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_schedule_display_warns_on_overrun() {
        let mut schedule = create_test_schedule();
        schedule.add(pinned("Late", at(17, 0), hours(2)));
        schedule.complete().unwrap();

        assert!(schedule.to_string().contains("**Warning:**"));
    }

    #[test]
    fn test_pinned_task_display() {
        let task = Task::builder("Review")
            .duration(SignedDuration::from_mins(45))
            .description("read the draft")
            .build_pinned(at(9, 15))
            .unwrap();

        assert_eq!(
            task.to_string(),
            "2023-01-01 09:15 - 2023-01-01 10:00 Review (read the draft)"
        );
    }

    #[test]
    fn test_task_display() {
        let task = Task::builder("Review")
            .duration(SignedDuration::from_mins(45))
            .complexity(4)
            .deadline(at(17, 0))
            .build()
            .unwrap();

        let output = task.to_string();
        assert!(output.contains("### Review"));
        assert!(output.contains("- Complexity: 4"));
        assert!(output.contains("- Priority: 3"));
        assert!(output.contains("- Deadline: 2023-01-01 17:00"));
    }

    #[test]
    fn test_schedule_json() {
        let mut schedule = create_test_schedule();
        schedule.add(PinnedTask::rest(at(12, 0), SignedDuration::from_mins(30)).unwrap());
        schedule.complete().unwrap();

        let json: serde_json::Value = serde_json::from_str(&schedule.to_json().unwrap()).unwrap();
        let entry = &json["tasks"][0];
        assert_eq!(entry["name"], "rest");
        assert_eq!(entry["kind"], "rest");
        assert_eq!(entry["complexity"], 3);
        assert_eq!(entry["start"], "2023-01-01T12:00:00");
        assert_eq!(entry["stop"], "2023-01-01T12:30:00");
    }

    #[test]
    fn test_task_deserialize_applies_defaults() {
        let task: Task = serde_json::from_str(r#"{"name":"review","duration":"PT1H"}"#).unwrap();
        assert_eq!(task.name(), "review");
        assert_eq!(task.duration(), Some(hours(1)));
        assert_eq!(task.complexity(), Rating::MEDIUM);
        assert_eq!(task.kind(), TaskKind::Regular);
    }

    #[test]
    fn test_task_deserialize_names_bad_rating_field() {
        let err = serde_json::from_str::<Task>(r#"{"name":"x","complexity":9}"#).unwrap_err();
        assert!(err.to_string().contains("field 'complexity'"), "{err}");

        let err = serde_json::from_str::<Task>(r#"{"name":"x","priority":0}"#).unwrap_err();
        assert!(err.to_string().contains("field 'priority'"), "{err}");
    }

    #[test]
    fn test_task_deserialize_rejects_negative_spans() {
        let err = serde_json::from_str::<Task>(r#"{"name":"neg","duration":"-PT1H"}"#).unwrap_err();
        assert!(err.to_string().contains("field 'duration'"), "{err}");

        let err = serde_json::from_str::<Task>(
            r#"{"name":"neg","duration":"PT1H","duration_inaccuracy":"-PT5H"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("field 'duration_inaccuracy'"), "{err}");
    }

    #[test]
    fn test_task_json_round_trip_keeps_validated_fields() {
        let task = Task::builder("write")
            .duration(hours(2))
            .complexity(4)
            .duration_inaccuracy(SignedDuration::from_mins(10))
            .build()
            .unwrap();
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""complexity":4"#), "{json}");
        assert_eq!(serde_json::from_str::<Task>(&json).unwrap(), task);
    }
}
