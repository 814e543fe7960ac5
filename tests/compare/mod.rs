mod empty_inputs;
mod single_line_word_change;
mod whitespace_insensitive_skeleton;
