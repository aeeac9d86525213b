//! Integration tests for the input pipeline: raw bytes through line assembly
//! into tokenized commands, exercised through the same stage contracts the
//! console uses.

mod common;

use common::ScriptedInput;
use lumen_console::{
    Command, CommandBuilder, CommandSource, ConsoleFault, LineAssembler, LineSource, MAX_ARGS,
    MAX_LINE_LEN,
};

/// Feeds bytes through both stages and collects every command produced.
fn run_pipeline(bytes: &[u8]) -> Vec<Command> {
    let mut input = ScriptedInput::new(bytes);
    let mut assembler = LineAssembler::new();
    let mut builder = CommandBuilder::new();
    let mut commands = Vec::new();

    // Poll the stages in console order until the pipeline drains.
    loop {
        assembler.update(&mut input);
        builder.update(&mut assembler).unwrap();
        match builder.next_command() {
            Some(command) => commands.push(command),
            None if !assembler.line_available() => break,
            None => {}
        }
    }
    commands
}

#[test]
fn bytes_become_a_structured_command() {
    let commands = run_pipeline(b"set 10 20 30 40\n");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].name(), b"set");
    assert_eq!(commands[0].arg_count(), 4);
    assert_eq!(commands[0].arg(0), Some(&b"10"[..]));
    assert_eq!(commands[0].arg(3), Some(&b"40"[..]));
}

#[test]
fn each_terminator_produces_exactly_one_command() {
    let commands = run_pipeline(b"help\n\nset 1 2 3 4\n");
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0].name(), b"help");
    assert_eq!(commands[1].name(), b"");
    assert_eq!(commands[2].name(), b"set");
}

#[test]
fn unterminated_tail_produces_nothing() {
    let commands = run_pipeline(b"help\nset 1");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].name(), b"help");
}

#[test]
fn over_long_line_truncates_before_tokenizing() {
    let mut bytes = vec![b'x'; MAX_LINE_LEN + 20];
    bytes.push(b'\n');
    let commands = run_pipeline(&bytes);

    assert_eq!(commands.len(), 1);
    // The name field itself is capped well below the line limit.
    assert_eq!(commands[0].name().len(), 8);
}

#[test]
fn argument_limit_holds_end_to_end() {
    let commands = run_pipeline(b"set a b c d e f g h\n");
    assert_eq!(commands[0].arg_count(), MAX_ARGS);
    assert_eq!(commands[0].arg(MAX_ARGS - 1), Some(&b"e"[..]));
}

#[test]
fn dropped_line_never_reaches_the_builder() {
    let mut input = ScriptedInput::new(b"a\nb\nc\ndropped\n");
    let mut assembler = LineAssembler::new();

    // One drain sees four finished lines; the queue holds three.
    assembler.update(&mut input);
    assert_eq!(assembler.dropped_lines(), 1);

    let mut builder = CommandBuilder::new();
    let mut names = Vec::new();
    while assembler.line_available() {
        builder.update(&mut assembler).unwrap();
        names.push(builder.next_command().unwrap());
    }
    let names: Vec<&[u8]> = names.iter().map(|command| command.name()).collect();
    assert_eq!(names, [&b"a"[..], b"b", b"c"]);
}

#[test]
fn builder_overflow_reports_the_fault() {
    let mut input = ScriptedInput::new(b"a\nb\nc\n");
    let mut assembler = LineAssembler::new();
    let mut builder = CommandBuilder::new();

    assembler.update(&mut input);

    // Nothing consumes the command queue, so the fourth enqueue must fail.
    builder.update(&mut assembler).unwrap();
    builder.update(&mut assembler).unwrap();
    builder.update(&mut assembler).unwrap();

    let mut late = ScriptedInput::new(b"d\n");
    assembler.update(&mut late);
    assert_eq!(
        builder.update(&mut assembler),
        Err(ConsoleFault::CommandQueueOverflow)
    );
}
