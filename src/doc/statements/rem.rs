/*!
# `REM <anything>`

## Purpose
A remark. Does nothing.

## Remarks
Everything after `REM` is kept so it shows in the `LIST` output.
`REM` must have a line number.

## Example
```text
10 REM COUNT TO THREE
```

*/
