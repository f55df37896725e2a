use colored::*;
use core_perms::PermissionSet;

enum Step {
    Grant(&'static str),
    Revoke(&'static str),
}

const START: &str = "test.test2,!test.test2.subtest";

const STEPS: &[Step] = &[
    Step::Grant("test.test2"),
    Step::Grant("document.4.view"),
    Step::Grant("document.4.edit"),
    Step::Grant("document.4"),
    Step::Grant("test.test2.subtest"),
    Step::Revoke("document.4.edit"),
    Step::Revoke("document.4.edit"),
    Step::Revoke("test.test2.subtest.subsubtest"),
    Step::Revoke("test"),
    Step::Revoke("document"),
];

pub fn run() -> anyhow::Result<()> {
    let mut set = PermissionSet::parse(START)?;
    println!("{:>40}  {}", "start".bold(), set);

    for step in STEPS {
        let label = match *step {
            Step::Grant(permission) => {
                set.grant(permission)?;
                format!("grant {}", permission).as_str().green()
            }
            Step::Revoke(permission) => {
                set.revoke(permission)?;
                format!("revoke {}", permission).as_str().red()
            }
        };
        println!("{:>40}  {}", label, set);
    }

    Ok(())
}
