/*!
# Error Messages

An error stops whatever was executing: one immediate statement, or an
entire `RUN`. The message is printed on a line of its own and the
interpreter waits for the next line.

## `DIVIDE BY ZERO`
The right side of a `/` evaluated to zero.

## `INVALID NUMBER`
The answer to an `INPUT` was not a whole number, optionally preceded by
a minus sign. This does not stop anything; `INPUT` asks again.

## `LINE NUMBER ERROR`
`GOTO` or `IF` tried to go to a line that is not in the program.

## `SYNTAX ERROR`
The line could not be understood. Also reported for mismatched parentheses,
a variable name containing a reserved word, a statement other than `LET`,
`PRINT`, or `INPUT` without a line number, and a command with a line number.

## `VARIABLE NOT DEFINED`
An expression used a variable that was never assigned.

*/
