/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` doesn't exist a `LINE NUMBER ERROR` will occur and
the program stops. `GOTO` must have a line number.

## Example
```text
10 GOTO 30
20 PRINT 1
30 PRINT 2
RUN
2
```

*/
