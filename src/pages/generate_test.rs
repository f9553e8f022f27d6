use super::*;

// =============================================================
// validate_prompt
// =============================================================

#[test]
fn blank_prompts_rejected_before_any_network_call() {
    for prompt in ["", "   ", "\n\t "] {
        assert_eq!(
            validate_prompt(prompt),
            Err(ClientError::Validation("Please enter a prompt.".to_owned()))
        );
    }
}

#[test]
fn valid_prompt_is_trimmed() {
    assert_eq!(
        validate_prompt("  Generate 24 hourly rows  "),
        Ok("Generate 24 hourly rows".to_owned())
    );
}
