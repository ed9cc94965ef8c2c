/*!
# Introductory Tutorial

Begin by opening a terminal and running the executable with no arguments.
There is no banner and no prompt; the interpreter simply waits for a line.
Type CTRL-D or `QUIT` to leave.

A line typed without a line number is executed as soon as you press ENTER.
This is called immediate mode. Only `LET`, `PRINT`, and `INPUT` work this way.

<pre><code>&nbsp;> PRINT 6 * 7
&nbsp;  42
</code></pre>

Precede a statement with a line number and it is saved in the program
instead. Nothing is printed. Line numbers are whole numbers from 1 up;
they decide the order in which the program runs and is listed, not the
order in which you type it.

<pre><code>&nbsp;> 20 PRINT X
&nbsp;> 10 LET X = 5
&nbsp;> LIST
&nbsp;  10 LET X = 5
&nbsp;  20 PRINT X
&nbsp;> RUN
&nbsp;  5
</code></pre>

Typing a line number that already exists replaces that line. Typing a line
number all by itself deletes the line. To edit a line, type its number and
press TAB. The line will be loaded into the input buffer for you to edit.

<pre><code>&nbsp;> 20<i>{TAB}</i>
&nbsp;> 20 PRINT X
</code></pre>

Programs may also be read from a file, one line per line of text, exactly
as if typed. When the file ends the interpreter exits.

```text
basic countdown.bas
```

Variables keep their values after a program ends, so you can inspect them
in immediate mode. `CLEAR` forgets both the program and every variable.

*/
