mod builtin_scalars;
