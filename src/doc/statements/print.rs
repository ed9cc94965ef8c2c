/*!
# `PRINT <expression>`

## Purpose
Prints the value of an expression followed by a line break.

## Example
```text
PRINT 2 * (3 + 4)
14
```

*/
