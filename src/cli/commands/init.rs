//! Initialize taskdist in a directory

use std::path::Path;

use taskdist::adapters::toml::{WorkforceFile, write_atomic};
use taskdist::config::Config;
use taskdist::core::models::{Employee, Priority, Proficiency, RequiredSkill, Role, Skill, Task};
use taskdist::output::{OperationResult, OutputMode};
use taskdist::paths;

/// Write a sample `taskdist.toml`, `workforce.toml` and `cv/` directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = Path::new(paths::PROJECT_CONFIG);
    let workforce_path = Path::new(paths::WORKFORCE_FILE);

    if (config_path.exists() || workforce_path.exists()) && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} or {} exists). Use --force to overwrite.",
                paths::PROJECT_CONFIG,
                paths::WORKFORCE_FILE
            ),
        }
        .render(mode);
        return Ok(());
    }

    Config::default().save(config_path)?;
    write_atomic(workforce_path, &sample_workforce())?;
    std::fs::create_dir_all(paths::CV_DIR)?;
    log::debug!("Wrote {} and {}", config_path.display(), workforce_path.display());

    OperationResult {
        success: true,
        message: format!(
            "Created {}, {} and {}/\n\nNext steps:\n  taskdist distribute --dry-run\n  taskdist distribute",
            paths::PROJECT_CONFIG,
            paths::WORKFORCE_FILE,
            paths::CV_DIR
        ),
    }
    .render(mode);
    Ok(())
}

fn sample_workforce() -> WorkforceFile {
    let mut api = Task::new("T1", "Build login API", "backend");
    api.required_skills = vec![RequiredSkill::new("rust", Proficiency::Intermediate)];
    api.priority = Priority::High;

    let mut page = Task::new("T2", "Settings page", "frontend");
    page.required_skills = vec![RequiredSkill::new("react", Proficiency::Beginner)];

    let mut ada = Employee::new("E1", "Ada", "backend");
    ada.skills = vec![Skill::new("rust", Proficiency::Advanced)];

    let mut lin = Employee::new("E2", "Lin", "frontend");
    lin.skills = vec![Skill::new("react", Proficiency::Intermediate)];
    lin.role = Role::Trainee;

    WorkforceFile {
        tasks: vec![api, page],
        employees: vec![ada, lin],
    }
}
