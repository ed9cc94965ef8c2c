/*!
# `LET <variable> = <expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is required. The variable is created if it doesn't exist.
If the expression fails, the variable keeps its previous value.

## Example
```text
LET A = 5
LET B = A * 2 + 1
PRINT B
11
```

*/
