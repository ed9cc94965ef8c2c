/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a number from the terminal.

## Remarks
The prompt is ` ? ` with no line break. Anything other than an optional minus
followed by digits prints `INVALID NUMBER` and asks again.
When a program is read from a file, the answers are read from the same file.

## Example
```text
10 INPUT AGE
20 PRINT AGE + 1
RUN
 ? forty
INVALID NUMBER
 ? 40
41
```

*/
