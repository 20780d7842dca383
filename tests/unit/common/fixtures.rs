//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use taskdist::core::models::{
    CvProfile, CvSkill, Employee, Priority, Proficiency, RequiredSkill, Role, Skill, Task,
    TaskStatus,
};

/// Fixed base time so task ordering is reproducible
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap()
}

/// Builder for creating test tasks
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        let mut task = Task::new(id, format!("Task {id}"), "");
        task.created_at = base_time();
        Self { task }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn specialization(mut self, specialization: &str) -> Self {
        self.task.specialization = specialization.to_string();
        self
    }

    pub fn requires(mut self, skill: &str, min: Proficiency) -> Self {
        self.task.required_skills.push(RequiredSkill::new(skill, min));
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn assignee(mut self, employee_id: &str) -> Self {
        self.task.assignee = Some(employee_id.to_string());
        self
    }

    /// Created `minutes` after [`base_time`]
    pub fn created(mut self, minutes: i64) -> Self {
        self.task.created_at = base_time() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for creating test employees
pub struct EmployeeBuilder {
    employee: Employee,
}

impl EmployeeBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            employee: Employee::new(id, format!("Employee {id}"), ""),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.employee.name = name.to_string();
        self
    }

    pub fn specialization(mut self, specialization: &str) -> Self {
        self.employee.specialization = specialization.to_string();
        self
    }

    pub fn skill(mut self, name: &str, proficiency: Proficiency) -> Self {
        self.employee.skills.push(Skill::new(name, proficiency));
        self
    }

    pub fn workload(mut self, current: u32, max: u32) -> Self {
        self.employee.current_active_tasks = current;
        self.employee.max_concurrent_tasks = max;
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.employee.role = role;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.employee.active = false;
        self
    }

    pub fn build(self) -> Employee {
        self.employee
    }
}

/// A CV profile listing the given skills
pub fn cv(skills: &[(&str, Proficiency)]) -> CvProfile {
    CvProfile::with_skills(skills.iter().map(|(name, p)| CvSkill::new(*name, *p)).collect())
}

/// The two-task, two-employee workforce from the frontend/backend walkthrough
pub fn frontend_backend() -> (Vec<Task>, Vec<Employee>) {
    let tasks = vec![
        TaskBuilder::new("T1")
            .title("Build dashboard")
            .specialization("frontend")
            .requires("react", Proficiency::Advanced)
            .build(),
        TaskBuilder::new("T2").title("Add endpoint").specialization("backend").created(1).build(),
    ];
    let employees = vec![
        EmployeeBuilder::new("E1")
            .name("Ada")
            .specialization("frontend")
            .skill("react", Proficiency::Expert)
            .build(),
        EmployeeBuilder::new("E2").name("Bo").specialization("backend").build(),
    ];
    (tasks, employees)
}
