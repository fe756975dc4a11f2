
mod new_round_message_validator_tests;
