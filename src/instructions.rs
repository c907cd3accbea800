//! The "what to do next" message shown after a project is generated.

/// Renders the post-generation instructions for the user.
///
/// The message is informational only; nothing parses it. It names the
/// generated project and the repository URL the first push should go to.
pub fn further_instructions(project_name: &str, git_repo_url: &str) -> String {
    let project_directory = project_name.to_lowercase().replace(' ', "-");
    format!(
        r#"
Your project {project_name} is created.

1) Now you can start working on it:

    $ cd {project_directory} && git init

2) If you don't have Poetry installed run:

    $ make poetry-download

3) Initialize poetry and install pre-commit hooks:

    $ make install
    $ make pre-commit-install

4) Run formatters, linters, and tests:

    $ make format lint test

5) Upload initial code to GitHub:

    $ git add .
    $ git commit -m "Initial commit"
    $ git branch -M main
    $ git remote add origin {git_repo_url}.git
    $ git push -u origin main
"#
    )
}
