use std::{
    io,
    process::{Command, Stdio},
};

/// Checks that an external program can be started from the command line
pub trait ToolProbe {
    fn probe(&self, program: &str) -> io::Result<()>;
}

/// Launches the program with `--version`, discarding anything it prints
pub struct SystemProbe;

impl ToolProbe for SystemProbe {
    fn probe(&self, program: &str) -> io::Result<()> {
        launch(Command::new(program).arg("--version"))
    }
}

/// Start the command and return as soon as it is running.  A child that has not
/// already exited is killed; its exit status is never checked.
fn launch(cmd: &mut Command) -> io::Result<()> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    trace!("Started {:?} (pid {})", cmd.get_program(), child.id());

    if child.try_wait()?.is_none() {
        child.kill()?;
    }
    child.wait()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn missing_program_reports_os_error() {
        let e = SystemProbe
            .probe("arem-no-such-program-7f3a")
            .unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn long_running_program_does_not_block() {
        let t = Instant::now();
        launch(Command::new("sleep").arg("30")).unwrap();
        assert!(t.elapsed() < Duration::from_secs(10));
    }
}
