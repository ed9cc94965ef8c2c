/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Go to a line only when a comparison holds.

## Remarks
The comparison is one of `<`, `>`, or `=`. Both expressions are evaluated,
left first. When the comparison is false the program continues with the
next line. A missing target line is a `LINE NUMBER ERROR`, but only when
the comparison is true. `IF` must have a line number.

## Example
```text
10 LET N = 3
20 PRINT N
30 LET N = N - 1
40 IF N > 0 THEN 20
RUN
3
2
1
```

*/
