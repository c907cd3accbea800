use whittle::config::{
    load_answers, CiPlatform, DatabaseOption, ProjectOptions, ProjectType, RawOptions,
};

fn raw_options() -> RawOptions {
    RawOptions {
        project_name: "My Project".to_string(),
        git_repo_url: "https://github.com/user/my-project".to_string(),
        ci_platform: "github".to_string(),
        project_type: "fastapi_app".to_string(),
        db_option: "beanie".to_string(),
        include_ml_exp_folder: "y".to_string(),
    }
}

#[test]
fn test_ci_platform_from_str() {
    assert_eq!("github".parse::<CiPlatform>().unwrap(), CiPlatform::Github);
    assert_eq!("gitlab".parse::<CiPlatform>().unwrap(), CiPlatform::Gitlab);
    assert_eq!("none".parse::<CiPlatform>().unwrap(), CiPlatform::None);
    assert!("jenkins".parse::<CiPlatform>().is_err());
    assert!("GitHub".parse::<CiPlatform>().is_err());
}

#[test]
fn test_project_type_from_str() {
    assert_eq!(
        "fastapi_app".parse::<ProjectType>().unwrap(),
        ProjectType::FastapiApp
    );
    assert_eq!("empty".parse::<ProjectType>().unwrap(), ProjectType::Empty);
    assert!("cli_app".parse::<ProjectType>().is_err());
}

#[test]
fn test_database_option_from_str() {
    assert_eq!(
        "sqlalchemy_orm".parse::<DatabaseOption>().unwrap(),
        DatabaseOption::SqlalchemyOrm
    );
    assert_eq!(
        "sqlalchemy_queries".parse::<DatabaseOption>().unwrap(),
        DatabaseOption::SqlalchemyQueries
    );
    assert_eq!(
        "sqlmodel".parse::<DatabaseOption>().unwrap(),
        DatabaseOption::Sqlmodel
    );
    assert_eq!("beanie".parse::<DatabaseOption>().unwrap(), DatabaseOption::Beanie);
    assert_eq!("none".parse::<DatabaseOption>().unwrap(), DatabaseOption::None);
    assert!("sqlalchemy".parse::<DatabaseOption>().is_err());
}

#[test]
fn test_template_dir_name() {
    assert_eq!(DatabaseOption::None.template_dir_name(), None);
    assert_eq!(
        DatabaseOption::SqlalchemyOrm.template_dir_name(),
        Some("sqlalchemy")
    );
    assert_eq!(
        DatabaseOption::SqlalchemyQueries.template_dir_name(),
        Some("sqlalchemy")
    );
    assert_eq!(DatabaseOption::Sqlmodel.template_dir_name(), Some("sqlmodel"));
    assert_eq!(DatabaseOption::Beanie.template_dir_name(), Some("beanie"));
}

#[test]
fn test_resolve() {
    let options = ProjectOptions::resolve(&raw_options()).unwrap();
    assert_eq!(options.project_name, "My Project");
    assert_eq!(options.ci_platform, CiPlatform::Github);
    assert_eq!(options.project_type, ProjectType::FastapiApp);
    assert_eq!(options.database, DatabaseOption::Beanie);
    assert!(options.include_ml_folder);

    let mut raw = raw_options();
    raw.include_ml_exp_folder = "n".to_string();
    assert!(!ProjectOptions::resolve(&raw).unwrap().include_ml_folder);
}

#[test]
fn test_resolve_rejects_out_of_domain_values() {
    let mut raw = raw_options();
    raw.ci_platform = "jenkins".to_string();
    assert!(ProjectOptions::resolve(&raw).is_err());

    let mut raw = raw_options();
    raw.db_option = "mongo".to_string();
    assert!(ProjectOptions::resolve(&raw).is_err());

    let mut raw = raw_options();
    raw.include_ml_exp_folder = "maybe".to_string();
    assert!(ProjectOptions::resolve(&raw).is_err());
}

#[test]
fn test_load_answers() {
    let content = r#"
    {
        "project_name": "My Project",
        "git_repo_url": "https://github.com/user/my-project",
        "ci_platform": "gitlab",
        "project_type": "empty",
        "db_option": "none",
        "include_ml_exp_folder": "n"
    }
    "#;
    let raw = load_answers(content).unwrap();
    assert_eq!(raw.ci_platform, "gitlab");
    assert_eq!(raw.project_type, "empty");

    let options = ProjectOptions::resolve(&raw).unwrap();
    assert_eq!(options.ci_platform, CiPlatform::Gitlab);
    assert_eq!(options.project_type, ProjectType::Empty);
    assert_eq!(options.database, DatabaseOption::None);
    assert!(!options.include_ml_folder);
}

#[test]
fn test_load_answers_invalid_json() {
    assert!(load_answers("not json").is_err());
    assert!(load_answers("{}").is_err());
}
