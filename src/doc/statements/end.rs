/*!
# `END`

## Purpose
Stop running the program and return to waiting for lines.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional; a program also stops after
its last line. `END` must have a line number.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
