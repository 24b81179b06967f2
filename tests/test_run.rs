use prompt_admin::application::PromptManager;
use prompt_admin::cli::args::{Command, FieldArgs};
use prompt_admin::domain::{DomainError, PromptId};
use prompt_admin::execute;
use prompt_admin::ports::TablePresenter;
use prompt_admin::util::testing::{
    complete_fields, sample_prompt, MockPromptRepository, RecordingNotifier, RepositoryCall,
};

type Manager = PromptManager<MockPromptRepository, RecordingNotifier>;

fn manager() -> Manager {
    let mock = MockPromptRepository::builder()
        .with_prompt(sample_prompt(1, "Summarize"))
        .with_prompt(sample_prompt(2, "Translate"))
        .with_next_id(3)
        .build();
    PromptManager::new(mock, RecordingNotifier::default())
}

fn run_command(manager: &mut Manager, command: Command) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = execute(manager, &TablePresenter::new(), command, &mut out);
    (result, String::from_utf8(out).expect("Output should be UTF-8"))
}

fn all_fields(title: &str) -> FieldArgs {
    let fields = complete_fields(title);
    FieldArgs {
        title: Some(fields.title),
        description: Some(fields.description),
        image_url: Some(fields.image_url),
        kind: Some(fields.kind),
        attention_note: Some(fields.attention_note),
        example_question: Some(fields.example_question),
        example_answer: Some(fields.example_answer),
    }
}

#[test]
fn given_list_command_when_executing_then_prints_table_in_server_order() {
    // Arrange
    let mut manager = manager();

    // Act
    let (result, output) = run_command(&mut manager, Command::List { json: false });

    // Assert
    assert!(result.is_ok());
    let summarize = output.find("Summarize").expect("Row for prompt 1");
    let translate = output.find("Translate").expect("Row for prompt 2");
    assert!(summarize < translate);
    assert!(output.starts_with("ID"));
}

#[test]
fn given_list_json_command_when_executing_then_prints_json_array() {
    let mut manager = manager();

    let (result, output) = run_command(&mut manager, Command::List { json: true });

    assert!(result.is_ok());
    let parsed: serde_json::Value = serde_json::from_str(&output).expect("Output should be JSON");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    assert_eq!(parsed[0]["id"], 1);
    assert_eq!(parsed[1]["title"], "Translate");
}

#[test]
fn given_complete_add_command_when_executing_then_creates_and_prints_new_row() {
    // Arrange
    let mut manager = manager();

    // Act
    let (result, output) = run_command(
        &mut manager,
        Command::Add {
            fields: all_fields("Classify"),
        },
    );

    // Assert
    assert!(result.is_ok());
    assert!(output.contains("Classify"));
    assert_eq!(
        manager.repository().calls(),
        &[
            RepositoryCall::List,
            RepositoryCall::Create(complete_fields("Classify"))
        ]
    );
    assert_eq!(manager.find(&PromptId::from(3)).map(|p| p.fields.title.as_str()), Some("Classify"));
}

#[test]
fn given_add_command_missing_fields_when_executing_then_reports_fields_and_sends_nothing() {
    // Arrange
    let mut manager = manager();
    let fields = FieldArgs {
        title: Some("Only a title".to_string()),
        ..Default::default()
    };

    // Act
    let (result, output) = run_command(&mut manager, Command::Add { fields });

    // Assert
    let message = format!("{:#}", result.expect_err("Add should fail"));
    assert!(message.contains("description: Please enter the description"));
    assert!(message.contains("example_answer: Please enter the example answer"));
    assert!(!message.contains("title:"));
    assert!(output.is_empty());
    assert_eq!(manager.repository().calls(), &[RepositoryCall::List]);
}

#[test]
fn given_edit_command_with_one_field_when_executing_then_keeps_other_fields() {
    // Arrange
    let mut manager = manager();
    let fields = FieldArgs {
        title: Some("Summarize briefly".to_string()),
        ..Default::default()
    };

    // Act
    let (result, _output) = run_command(
        &mut manager,
        Command::Edit {
            prompt_id: PromptId::from(1),
            fields,
        },
    );

    // Assert
    assert!(result.is_ok());
    let mut expected = complete_fields("Summarize");
    expected.title = "Summarize briefly".to_string();
    assert_eq!(
        manager.repository().calls().last(),
        Some(&RepositoryCall::Update(PromptId::from(1), expected))
    );
    assert_eq!(
        manager.find(&PromptId::from(2)).map(|p| p.fields.title.as_str()),
        Some("Translate")
    );
}

#[test]
fn given_edit_command_for_unknown_id_when_executing_then_returns_not_found() {
    let mut manager = manager();

    let (result, _output) = run_command(
        &mut manager,
        Command::Edit {
            prompt_id: PromptId::from(99),
            fields: FieldArgs::default(),
        },
    );

    let err = result.expect_err("Edit should fail");
    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::PromptNotFound(id)) if *id == PromptId::from(99)
    ));
    assert_eq!(manager.repository().calls(), &[RepositoryCall::List]);
}

#[test]
fn given_delete_command_when_executing_then_removes_row() {
    // Arrange
    let mut manager = manager();

    // Act
    let (result, output) = run_command(
        &mut manager,
        Command::Delete {
            prompt_id: PromptId::from(1),
        },
    );

    // Assert
    assert!(result.is_ok());
    assert!(!output.contains("Summarize"));
    assert!(output.contains("Translate"));
    assert_eq!(manager.notifier().successes, vec!["Deleted successfully".to_string()]);
}

#[test]
fn given_failing_load_when_executing_then_stops_before_command() {
    let mock = MockPromptRepository::builder().with_list_failure().build();
    let mut manager = PromptManager::new(mock, RecordingNotifier::default());

    let (result, output) = run_command(
        &mut manager,
        Command::Delete {
            prompt_id: PromptId::from(1),
        },
    );

    assert!(result.is_err());
    assert!(output.is_empty());
    assert_eq!(manager.repository().calls(), &[RepositoryCall::List]);
    assert_eq!(manager.notifier().failures, vec!["Load failed".to_string()]);
}
