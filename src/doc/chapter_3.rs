/*!
# Commands

Commands act on the whole session. They execute immediately and are never
part of a program; a command with a line number is a `SYNTAX ERROR`.
*/

pub mod CLEAR {
    /*!
    ## `CLEAR` Forgets the program and all variables.
    ```text
    10 PRINT 1
    LET A = 1
    CLEAR
    LIST
    PRINT A
    VARIABLE NOT DEFINED
    ```
    */
}

pub mod HELP {
    /*!
    ## `HELP` Prints a one line summary of the statements and commands.
    */
}

pub mod LIST {
    /*!
    ## `LIST` Shows the program, lowest line number first.
    Each line is shown exactly as it was typed.
    ```text
    20 PRINT  X
    10 LET X=1
    LIST
    10 LET X=1
    20 PRINT  X
    ```
    */
}

pub mod QUIT {
    /*!
    ## `QUIT` Leaves the interpreter.
    The end of the input, CTRL-D on a terminal, does the same.
    */
}

pub mod RUN {
    /*!
    ## `RUN` Runs the program from its lowest line number.
    The program stops at `END` or after its last line. Variables are not
    cleared first, and they keep their values when the program stops,
    even when it stops on an error.
    ```text
    10 PRINT 1
    20 PRINT 2
    RUN
    1
    2
    ```
    */
}
