/*!
# Expressions and Variables

All values are whole numbers, signed and 32 bits wide. There are no
fractions, no strings, and no arrays.

A variable is a name for a value. Names are made of the ASCII letters and
digits and are case sensitive, so `A` and `a` are different variables.
No reserved word may appear anywhere inside a name: `FRIEND` is rejected
because it contains `END`, and `SHIFT` because it contains `IF`.

A variable comes into existence the first time it is assigned with `LET`
or `INPUT`. Using a variable before then is a `VARIABLE NOT DEFINED` error;
variables are never assumed to be zero.

## Operators

| Operator | Meaning |
|----------|---------|
| `*`      | Multiplication |
| `/`      | Division, truncated toward zero |
| `+`      | Addition |
| `-`      | Subtraction |

`*` and `/` bind tighter than `+` and `-`. Operators of the same
precedence work left to right. Parentheses group and may be nested.

```text
PRINT 1+2*3
7
PRINT (1+2)*3
9
PRINT 10-3-2
5
PRINT 7/2
3
```

There is no unary minus. Write `0-5` for negative five.
Results that exceed 32 bits wrap around.

*/
