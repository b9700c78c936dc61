use conductor_tasks::{plan_task, ExecutionMode};

pub fn run(description: &str, mode: &str) -> anyhow::Result<()> {
    let mode: ExecutionMode = mode.parse()?;
    let plan = plan_task(description, mode)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conductor_tasks::TaskError;

    #[test]
    fn test_plan_errors_surface() {
        let err = run("write a blog post", "someday").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TaskError>(),
            Some(TaskError::UnknownMode(_))
        ));

        let err = run("", "parallel").unwrap_err();
        assert_eq!(
            err.downcast_ref::<TaskError>(),
            Some(&TaskError::EmptyDescription)
        );
    }

    #[test]
    fn test_plan_ok() {
        assert!(run("Generar un reporte CSV", "continuous").is_ok());
    }
}
